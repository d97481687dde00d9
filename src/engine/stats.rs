use serde::Serialize;

use crate::models::report::{STATUS_ACTIVE, STATUS_RESOLVED};
use crate::store::{ReportStore, StoreError, UserStore};

const EMERGENCY_CATEGORIES: [&str; 5] = ["fire", "accident", "medical", "flood", "earthquake"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub registered_users: usize,
    pub total_reports: usize,
    pub active_alerts: usize,
    pub resolved_cases: usize,
    pub ongoing_emergencies: usize,
}

/// Re-derived from current store state on every call; nothing is cached.
pub fn compute_stats(
    reports: &dyn ReportStore,
    users: &dyn UserStore,
) -> Result<DashboardStats, StoreError> {
    let registered_users = users.count()?;
    let reports = reports.list()?;

    let active_alerts = reports.iter().filter(|r| r.status == STATUS_ACTIVE).count();
    let resolved_cases = reports
        .iter()
        .filter(|r| r.status == STATUS_RESOLVED)
        .count();
    let ongoing_emergencies = reports
        .iter()
        .filter(|r| is_emergency_category(&r.emergency_type))
        .count();

    Ok(DashboardStats {
        registered_users,
        total_reports: reports.len(),
        active_alerts,
        resolved_cases,
        ongoing_emergencies,
    })
}

fn is_emergency_category(emergency_type: &str) -> bool {
    let lowered = emergency_type.to_ascii_lowercase();
    EMERGENCY_CATEGORIES
        .iter()
        .any(|category| lowered.contains(category))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::{compute_stats, is_emergency_category};
    use crate::models::report::{Priority, Report, Reporter, STATUS_ACTIVE, STATUS_RESOLVED};
    use crate::models::responder::GeoPoint;
    use crate::models::user::User;
    use crate::store::{MemoryReportStore, MemoryUserStore, ReportStore, UserStore};

    fn report(emergency_type: &str, status: &str) -> (Uuid, Report) {
        let key = Uuid::now_v7();
        let now = Utc::now();
        (
            key,
            Report {
                id: format!("R{}", key.simple()),
                emergency_type: emergency_type.to_string(),
                description: "test".to_string(),
                reporter: Reporter {
                    name: "Ada".to_string(),
                    phone: "+234-555-0100".to_string(),
                    info: None,
                },
                location: GeoPoint { lat: 6.5, lon: 3.3 },
                priority: Priority::Medium,
                assigned_to: "Unassigned".to_string(),
                assigned_contact: "N/A".to_string(),
                distance: "Not available".to_string(),
                status: status.to_string(),
                date: now,
                time: now,
            },
        )
    }

    #[test]
    fn counts_active_resolved_and_totals() {
        let reports = MemoryReportStore::new();
        let users = MemoryUserStore::new();

        for _ in 0..3 {
            let (key, r) = report("fire", STATUS_ACTIVE);
            reports.insert(key, r).unwrap();
        }
        for _ in 0..2 {
            let (key, r) = report("power outage", STATUS_RESOLVED);
            reports.insert(key, r).unwrap();
        }

        users
            .upsert(User {
                id: Uuid::new_v4(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: "+234-555-0100".to_string(),
                password: "secret".to_string(),
                last_login: Utc::now(),
            })
            .unwrap();

        let stats = compute_stats(&reports, &users).unwrap();
        assert_eq!(stats.registered_users, 1);
        assert_eq!(stats.total_reports, 5);
        assert_eq!(stats.active_alerts, 3);
        assert_eq!(stats.resolved_cases, 2);
        assert_eq!(stats.ongoing_emergencies, 3);
    }

    #[test]
    fn category_match_is_case_insensitive_contains() {
        assert!(is_emergency_category("Fire"));
        assert!(is_emergency_category("FLOOD"));
        assert!(is_emergency_category("road accident"));
        assert!(!is_emergency_category("power outage"));
    }
}
