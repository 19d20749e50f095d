// Rust guideline compliant 2026-10-19

//! Property-based tests for great-circle distance.

use nearby_core::{distance_km, Coordinate, EARTH_RADIUS_KM};
use proptest::prelude::*;

/// Generates arbitrary valid coordinates.
fn arb_coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(latitude, longitude)| Coordinate {
        latitude,
        longitude,
    })
}

proptest! {
    /// The distance from a point to itself is zero.
    #[test]
    fn prop_distance_to_self_is_zero(a in arb_coordinate()) {
        prop_assert_eq!(distance_km(a, a).unwrap(), 0.0);
    }

    /// Distance does not depend on argument order.
    #[test]
    fn prop_distance_is_symmetric(a in arb_coordinate(), b in arb_coordinate()) {
        let ab = distance_km(a, b).unwrap();
        let ba = distance_km(b, a).unwrap();
        prop_assert!((ab - ba).abs() < 1e-9, "{} != {}", ab, ba);
    }

    /// Distance is non-negative and never exceeds half the circumference.
    #[test]
    fn prop_distance_is_bounded(a in arb_coordinate(), b in arb_coordinate()) {
        let d = distance_km(a, b).unwrap();
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
    }

    /// Out-of-range latitudes are rejected rather than producing a distance.
    #[test]
    fn prop_out_of_range_latitude_rejected(
        latitude in prop_oneof![90.0001f64..1_000.0, -1_000.0f64..-90.0001],
        b in arb_coordinate(),
    ) {
        let a = Coordinate { latitude, longitude: 0.0 };
        prop_assert!(distance_km(a, b).is_err());
        prop_assert!(distance_km(b, a).is_err());
    }

    /// Out-of-range longitudes are rejected rather than producing a distance.
    #[test]
    fn prop_out_of_range_longitude_rejected(
        longitude in prop_oneof![180.0001f64..1_000.0, -1_000.0f64..-180.0001],
        b in arb_coordinate(),
    ) {
        let a = Coordinate { latitude: 0.0, longitude };
        prop_assert!(distance_km(a, b).is_err());
    }
}
