//! Coordinate primitives: great-circle distance and validity checks.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Approximate centroid of Iceland.
pub const ICELAND_COORDS: (f64, f64) = (64.995_753_860_7, -18.573_961_670_8);

const ICELAND_RADIUS_KM: f64 = 800.0;

/// Haversine distance in kilometers between two `(lat, lon)` points.
///
/// Records with missing coordinates are stored with zeroed or null fields,
/// so a zero or non-finite component yields `f64::INFINITY` instead of an
/// error. Such records sort last in distance order and any positive
/// `max_dist` filter excludes them.
pub fn distance(loc1: (f64, f64), loc2: (f64, f64)) -> f64 {
    let (lat1, lon1) = loc1;
    let (lat2, lon2) = loc2;

    let degenerate = |v: f64| v == 0.0 || !v.is_finite();
    if degenerate(lat1) || degenerate(lon1) || degenerate(lat2) || degenerate(lon2) {
        return f64::INFINITY;
    }

    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let slat = (dlat / 2.0).sin();
    let slon = (dlon / 2.0).sin();
    let a = slat * slat + lat1.to_radians().cos() * lat2.to_radians().cos() * slon * slon;
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Whether the point lies within (or very close to) Iceland.
pub fn in_iceland(loc: (f64, f64)) -> bool {
    distance(loc, ICELAND_COORDS) <= ICELAND_RADIUS_KM
}

/// Whether `lat` and `lon` form a valid WGS84 coordinate.
pub fn valid_wgs84_coord(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_munich_berlin() {
        let munich = (48.1372, 11.5756);
        let berlin = (52.5186, 13.4083);
        let d = distance(munich, berlin);
        assert!((d - 504.2).abs() < 0.1, "got {d}");
    }

    #[test]
    fn distance_of_identical_points_is_zero() {
        let p = (64.1466, -21.9426);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn missing_coordinates_yield_infinity() {
        let reykjavik = (64.1466, -21.9426);
        assert_eq!(distance((0.0, 0.0), reykjavik), f64::INFINITY);
        assert_eq!(distance(reykjavik, (64.1, 0.0)), f64::INFINITY);
        assert_eq!(distance(reykjavik, (f64::NAN, -21.0)), f64::INFINITY);
    }

    #[test]
    fn wgs84_bounds() {
        assert!(valid_wgs84_coord(64.0, -22.0));
        assert!(valid_wgs84_coord(-90.0, 180.0));
        assert!(!valid_wgs84_coord(91.0, 0.0));
        assert!(!valid_wgs84_coord(0.0, 200.0));
        assert!(!valid_wgs84_coord(-90.1, 0.0));
    }

    #[test]
    fn iceland_heuristic() {
        assert!(in_iceland((64.1466, -21.9426))); // Reykjavík
        assert!(in_iceland((66.0449, -17.3389))); // Húsavík
        assert!(!in_iceland((48.1372, 11.5756))); // Munich
    }
}
