use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::responder::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Absent or unrecognized values fold to `Medium`.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("low") => Priority::Low,
            Some(value) if value.eq_ignore_ascii_case("high") => Priority::High,
            _ => Priority::Medium,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reporter {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_RESOLVED: &str = "resolved";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    #[serde(rename = "type")]
    pub emergency_type: String,
    pub description: String,
    pub reporter: Reporter,
    pub location: GeoPoint,
    pub priority: Priority,
    pub assigned_to: String,
    pub assigned_contact: String,
    pub distance: String,
    pub status: String,
    pub date: DateTime<Utc>,
    pub time: DateTime<Utc>,
}
