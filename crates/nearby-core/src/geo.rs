// Rust guideline compliant 2026-10-19

//! Great-circle distance between coordinates.

use crate::{Coordinate, Result};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the haversine distance between two coordinates.
///
/// # Arguments
///
/// * `a` - First coordinate
/// * `b` - Second coordinate
///
/// # Returns
///
/// The non-negative distance in kilometres.
///
/// # Errors
///
/// Returns `InvalidCoordinate` if either coordinate is not finite or out of range.
pub fn distance_km(a: Coordinate, b: Coordinate) -> Result<f64> {
    a.validate()?;
    b.validate()?;

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodal points.
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    Ok(EARTH_RADIUS_KM * c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let a = Coordinate::new(17.494, 78.4595).unwrap();
        assert_eq!(distance_km(a, a).unwrap(), 0.0);
    }

    #[test]
    fn test_rejects_nan_latitude() {
        let a = Coordinate {
            latitude: f64::NAN,
            longitude: 0.0,
        };
        let b = Coordinate::new(0.0, 0.0).unwrap();
        assert!(distance_km(a, b).is_err());
    }

    #[test]
    fn test_antipodal_points_are_half_circumference() {
        let a = Coordinate::new(0.0, 0.0).unwrap();
        let b = Coordinate::new(0.0, 180.0).unwrap();
        let d = distance_km(a, b).unwrap();
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
