use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::{delete, get, patch, post};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::rest::require_text;
use crate::engine::matcher::find_nearest;
use crate::engine::notifier::enqueue_dispatch;
use crate::error::AppError;
use crate::models::dispatch::DispatchEvent;
use crate::models::report::{Priority, Report, Reporter, STATUS_ACTIVE};
use crate::models::responder::GeoPoint;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/report", post(create_report))
        .route("/reports", get(list_reports))
        .route("/reports/:id", delete(delete_report))
        .route("/reports/:id/status", patch(update_report_status))
}

#[derive(Deserialize)]
pub struct CreateReportRequest {
    #[serde(rename = "type")]
    pub emergency_type: Option<String>,
    pub description: Option<String>,
    pub reporter: Option<ReporterInput>,
    pub location: Option<LocationInput>,
    pub priority: Option<String>,
}

#[derive(Deserialize)]
pub struct ReporterInput {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub info: Option<String>,
}

#[derive(Deserialize)]
pub struct LocationInput {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportOutcome {
    Assigned,
    NoResponder,
}

#[derive(Serialize)]
pub struct ResponderContact {
    pub name: String,
    pub contact: String,
}

#[derive(Serialize)]
pub struct CreateReportResponse {
    pub status: ReportOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder: Option<ResponderContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub report: Report,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReportResponse {
    pub message: String,
    pub deleted_report: Report,
}

struct NewReport {
    emergency_type: String,
    description: String,
    reporter: Reporter,
    location: GeoPoint,
    priority: Priority,
}

/// Input-shape errors reject before any match or persist attempt.
fn validate(payload: CreateReportRequest) -> Result<NewReport, AppError> {
    let emergency_type = require_text(payload.emergency_type, "type")?;
    let description = require_text(payload.description, "description")?;

    let reporter = payload
        .reporter
        .ok_or_else(|| AppError::Validation("reporter is required".to_string()))?;
    let name = require_text(reporter.name, "reporter.name")?;
    let phone = require_text(reporter.phone, "reporter.phone")?;

    let location = payload
        .location
        .ok_or_else(|| AppError::Validation("location is required".to_string()))?;
    let lat = location
        .lat
        .ok_or_else(|| AppError::Validation("location.lat is required".to_string()))?;
    let lon = location
        .lon
        .ok_or_else(|| AppError::Validation("location.lon is required".to_string()))?;

    Ok(NewReport {
        emergency_type,
        description,
        reporter: Reporter {
            name,
            phone,
            info: reporter.info.filter(|v| !v.trim().is_empty()),
        },
        location: GeoPoint { lat, lon },
        priority: Priority::parse_or_default(payload.priority.as_deref()),
    })
}

async fn create_report(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateReportRequest>,
) -> Result<Json<CreateReportResponse>, AppError> {
    let new_report = validate(payload)?;

    let matched = find_nearest(
        &state.roster,
        &new_report.emergency_type,
        &new_report.location,
    );

    let record_id = Uuid::now_v7();
    let now = Utc::now();
    let report = Report {
        id: format!("R{}", record_id.simple()),
        emergency_type: new_report.emergency_type,
        description: new_report.description,
        reporter: new_report.reporter,
        location: new_report.location,
        priority: new_report.priority,
        assigned_to: matched.map_or_else(
            || "Unassigned".to_string(),
            |m| m.responder.name.clone(),
        ),
        assigned_contact: matched.map_or_else(
            || "N/A".to_string(),
            |m| m.responder.contact.clone(),
        ),
        distance: matched.map_or_else(
            || "Not available".to_string(),
            |m| format!("{:.2} km", m.distance_km),
        ),
        status: STATUS_ACTIVE.to_string(),
        date: now,
        time: now,
    };

    state.reports.insert(record_id, report.clone())?;

    match matched {
        Some(m) => {
            state
                .metrics
                .reports_total
                .with_label_values(&["assigned"])
                .inc();
            info!(
                report_id = %report.id,
                responder = %m.responder.name,
                distance_km = m.distance_km,
                "report assigned"
            );

            let event = DispatchEvent::new(m.responder, &report);
            let responder = ResponderContact {
                name: m.responder.name.clone(),
                contact: m.responder.contact.clone(),
            };
            enqueue_dispatch(&state, event).await;

            Ok(Json(CreateReportResponse {
                status: ReportOutcome::Assigned,
                responder: Some(responder),
                message: None,
                report,
            }))
        }
        None => {
            state
                .metrics
                .reports_total
                .with_label_values(&["no_responder"])
                .inc();
            warn!(
                report_id = %report.id,
                emergency_type = %report.emergency_type,
                "no responder found for report"
            );

            Ok(Json(CreateReportResponse {
                status: ReportOutcome::NoResponder,
                responder: None,
                message: Some(
                    "No available responder found for this emergency type.".to_string(),
                ),
                report,
            }))
        }
    }
}

async fn list_reports(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Report>>, AppError> {
    Ok(Json(state.reports.list()?))
}

async fn delete_report(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteReportResponse>, AppError> {
    let deleted = state
        .reports
        .remove(&id)?
        .ok_or_else(|| AppError::NotFound(format!("report {id} not found")))?;

    info!(report_id = %deleted.id, "report deleted");

    Ok(Json(DeleteReportResponse {
        message: "Report deleted successfully.".to_string(),
        deleted_report: deleted,
    }))
}

async fn update_report_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<Report>, AppError> {
    let status = require_text(payload.status, "status")?;

    let report = state
        .reports
        .set_status(&id, status)?
        .ok_or_else(|| AppError::NotFound(format!("report {id} not found")))?;

    info!(report_id = %report.id, status = %report.status, "report status updated");

    Ok(Json(report))
}
