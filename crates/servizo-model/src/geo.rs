//! Geographic helpers for the map widget.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates, in kilometres.
///
/// Haversine formula. Exposed for the map widget's "nearest" affordance;
/// listing order itself is never distance-sorted.
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_for_identical_points() {
        assert!(distance_km(12.9716, 77.5946, 12.9716, 77.5946) < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let forward = distance_km(12.9716, 77.5946, 13.0827, 80.2707);
        let backward = distance_km(13.0827, 80.2707, 12.9716, 77.5946);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn bengaluru_to_chennai_is_roughly_290_km() {
        let km = distance_km(12.9716, 77.5946, 13.0827, 80.2707);
        assert!((250.0..330.0).contains(&km), "got {km} km");
    }
}
