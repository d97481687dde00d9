use crate::geo::haversine_km;
use crate::models::responder::{GeoPoint, Responder};
use crate::roster::Roster;

/// Fresh per-call pairing of a roster entry and its computed distance.
/// Roster entries themselves are never annotated or mutated.
#[derive(Debug, Clone, Copy)]
pub struct MatchedResponder<'a> {
    pub responder: &'a Responder,
    pub distance_km: f64,
}

pub fn find_nearest<'a>(
    roster: &'a Roster,
    emergency_type: &str,
    location: &GeoPoint,
) -> Option<MatchedResponder<'a>> {
    roster
        .responders()
        .iter()
        .filter(|responder| responder.handles(emergency_type))
        .map(|responder| MatchedResponder {
            responder,
            distance_km: haversine_km(location, &responder.location),
        })
        // min_by keeps the first of equal elements, so ties resolve to
        // roster order and stay reproducible.
        .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
}

#[cfg(test)]
mod tests {
    use super::find_nearest;
    use crate::models::responder::{GeoPoint, Responder};
    use crate::roster::Roster;

    fn responder(name: &str, types: &[&str], lat: f64, lon: f64) -> Responder {
        Responder {
            name: name.to_string(),
            contact: format!("{name}@dispatch.example"),
            types: types.iter().map(|t| t.to_string()).collect(),
            location: GeoPoint { lat, lon },
        }
    }

    #[test]
    fn no_capable_responder_returns_none() {
        let roster = Roster::from_responders(vec![responder("Alpha", &["fire"], 10.0, 10.0)]);

        let matched = find_nearest(&roster, "medical", &GeoPoint { lat: 10.0, lon: 10.0 });
        assert!(matched.is_none());
    }

    #[test]
    fn empty_roster_returns_none() {
        let roster = Roster::empty();

        let matched = find_nearest(&roster, "fire", &GeoPoint { lat: 10.0, lon: 10.0 });
        assert!(matched.is_none());
    }

    #[test]
    fn nearest_capable_responder_wins() {
        let roster = Roster::from_responders(vec![
            responder("Alpha", &["fire"], 10.0, 10.0),
            responder("Beta", &["fire"], 10.0, 10.1),
        ]);

        let matched = find_nearest(&roster, "fire", &GeoPoint { lat: 10.0, lon: 10.0 }).unwrap();
        assert_eq!(matched.responder.name, "Alpha");
        assert!(matched.distance_km < 1e-9);

        let matched = find_nearest(&roster, "fire", &GeoPoint { lat: 10.0, lon: 10.09 }).unwrap();
        assert_eq!(matched.responder.name, "Beta");
    }

    #[test]
    fn type_comparison_ignores_case() {
        let roster = Roster::from_responders(vec![responder("Alpha", &["Fire"], 10.0, 10.0)]);

        let matched = find_nearest(&roster, "FIRE", &GeoPoint { lat: 10.0, lon: 10.0 });
        assert!(matched.is_some());
    }

    #[test]
    fn equal_distances_resolve_to_roster_order() {
        // Both responders sit at the same point, so distances are identical.
        let roster = Roster::from_responders(vec![
            responder("First", &["flood"], 5.0, 5.0),
            responder("Second", &["flood"], 5.0, 5.0),
        ]);

        let matched = find_nearest(&roster, "flood", &GeoPoint { lat: 6.0, lon: 6.0 }).unwrap();
        assert_eq!(matched.responder.name, "First");
    }
}
