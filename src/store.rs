use dashmap::DashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::models::report::Report;
use crate::models::user::User;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Report persistence boundary. A report's storage key is a UUID; the report
/// itself carries the application-level `R…` id, and lookups accept either.
pub trait ReportStore: Send + Sync {
    fn insert(&self, key: Uuid, report: Report) -> Result<(), StoreError>;

    /// All reports, newest first.
    fn list(&self) -> Result<Vec<Report>, StoreError>;

    fn remove(&self, id: &str) -> Result<Option<Report>, StoreError>;

    fn set_status(&self, id: &str, status: String) -> Result<Option<Report>, StoreError>;

    fn count(&self) -> Result<usize, StoreError>;
}

pub trait UserStore: Send + Sync {
    fn upsert(&self, user: User) -> Result<(), StoreError>;

    fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    fn list(&self) -> Result<Vec<User>, StoreError>;

    fn count(&self) -> Result<usize, StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryReportStore {
    reports: DashMap<Uuid, Report>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve_key(&self, id: &str) -> Option<Uuid> {
        if let Ok(key) = Uuid::parse_str(id) {
            if self.reports.contains_key(&key) {
                return Some(key);
            }
        }

        self.reports
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| *entry.key())
    }
}

impl ReportStore for MemoryReportStore {
    fn insert(&self, key: Uuid, report: Report) -> Result<(), StoreError> {
        self.reports.insert(key, report);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Report>, StoreError> {
        let mut reports: Vec<Report> = self
            .reports
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        reports.sort_by(|a, b| b.time.cmp(&a.time));
        Ok(reports)
    }

    fn remove(&self, id: &str) -> Result<Option<Report>, StoreError> {
        let Some(key) = self.resolve_key(id) else {
            return Ok(None);
        };
        Ok(self.reports.remove(&key).map(|(_, report)| report))
    }

    fn set_status(&self, id: &str, status: String) -> Result<Option<Report>, StoreError> {
        let Some(key) = self.resolve_key(id) else {
            return Ok(None);
        };
        let Some(mut report) = self.reports.get_mut(&key) else {
            return Ok(None);
        };

        report.status = status;
        Ok(Some(report.clone()))
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.reports.len())
    }
}

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<Uuid, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryUserStore {
    fn upsert(&self, user: User) -> Result<(), StoreError> {
        self.users.insert(user.id, user);
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.value().email == email)
            .map(|entry| entry.value().clone()))
    }

    fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.iter().map(|entry| entry.value().clone()).collect())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.users.len())
    }
}
