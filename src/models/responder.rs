use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Responder {
    pub name: String,
    pub contact: String,
    pub types: Vec<String>,
    pub location: GeoPoint,
}

impl Responder {
    pub fn handles(&self, emergency_type: &str) -> bool {
        self.types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(emergency_type))
    }
}

#[cfg(test)]
mod tests {
    use super::{GeoPoint, Responder};

    #[test]
    fn handles_matches_case_insensitively() {
        let responder = Responder {
            name: "Central Fire Station".to_string(),
            contact: "+220-555-0101".to_string(),
            types: vec!["Fire".to_string(), "rescue".to_string()],
            location: GeoPoint { lat: 6.52, lon: 3.37 },
        };

        assert!(responder.handles("fire"));
        assert!(responder.handles("FIRE"));
        assert!(responder.handles("Rescue"));
        assert!(!responder.handles("medical"));
    }
}
