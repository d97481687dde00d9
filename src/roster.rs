use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::responder::Responder;

#[derive(Debug, Error)]
pub enum RosterLoadError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse roster file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only responder catalogue, loaded once before the server starts
/// accepting requests and never mutated afterwards.
#[derive(Debug, Default)]
pub struct Roster {
    responders: Vec<Responder>,
}

impl Roster {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_responders(responders: Vec<Responder>) -> Self {
        Self { responders }
    }

    /// A missing or malformed roster file degrades to an empty roster so the
    /// report pipeline keeps running; every match then reports no responder.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(roster) => {
                info!(count = roster.len(), path = %path.display(), "responder roster loaded");
                roster
            }
            Err(err) => {
                warn!(
                    error = %err,
                    path = %path.display(),
                    "failed to load responder roster; matching degraded to no-responder"
                );
                Self::empty()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, RosterLoadError> {
        let raw = fs::read_to_string(path)?;
        let responders: Vec<Responder> = serde_json::from_str(&raw)?;
        Ok(Self { responders })
    }

    pub fn responders(&self) -> &[Responder] {
        &self.responders
    }

    pub fn len(&self) -> usize {
        self.responders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::Roster;

    #[test]
    fn missing_file_degrades_to_empty_roster() {
        let roster = Roster::load(std::path::Path::new("/nonexistent/responders.json"));
        assert!(roster.is_empty());
    }

    #[test]
    fn malformed_file_degrades_to_empty_roster() {
        let path = std::env::temp_dir().join(format!("roster-{}.json", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"{ not json").unwrap();

        let roster = Roster::load(&path);
        assert!(roster.is_empty());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn valid_file_loads_all_entries() {
        let path = std::env::temp_dir().join(format!("roster-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"[
                {
                    "name": "Central Fire Station",
                    "contact": "+234-555-0101",
                    "types": ["fire", "rescue"],
                    "location": { "lat": 6.52, "lon": 3.37 }
                },
                {
                    "name": "General Hospital",
                    "contact": "+234-555-0102",
                    "types": ["medical"],
                    "location": { "lat": 6.45, "lon": 3.40 }
                }
            ]"#,
        )
        .unwrap();

        let roster = Roster::load(&path);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.responders()[0].name, "Central Fire Station");

        let _ = std::fs::remove_file(&path);
    }
}
