use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::report::Report;
use crate::models::responder::Responder;

/// One line of the append-only dispatch audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchEvent {
    pub time: DateTime<Utc>,
    pub responder: String,
    pub contact: String,
    pub report_id: String,
    pub emergency_type: String,
}

impl DispatchEvent {
    pub fn new(responder: &Responder, report: &Report) -> Self {
        Self {
            time: Utc::now(),
            responder: responder.name.clone(),
            contact: responder.contact.clone(),
            report_id: report.id.clone(),
            emergency_type: report.emergency_type.clone(),
        }
    }
}
