//! Property-based tests for distance estimation and station snapshots

use domain::{BikeStation, DistanceMethod, GeoLocation, estimate_distance, haversine_distance};
use proptest::prelude::*;

fn latitude() -> impl Strategy<Value = f64> {
    -89.0f64..=89.0f64
}

fn longitude() -> impl Strategy<Value = f64> {
    -179.0f64..=179.0f64
}

mod distance_tests {
    use super::*;

    proptest! {
        #[test]
        fn distance_to_self_is_zero(lat in latitude(), lon in longitude()) {
            prop_assert!(estimate_distance(lat, lon, lat, lon).abs() < f64::EPSILON);
            prop_assert!(haversine_distance(lat, lon, lat, lon).abs() < f64::EPSILON);
        }

        #[test]
        fn distance_is_symmetric(
            lat1 in latitude(), lon1 in longitude(),
            lat2 in latitude(), lon2 in longitude()
        ) {
            let ab = estimate_distance(lat1, lon1, lat2, lon2);
            let ba = estimate_distance(lat2, lon2, lat1, lon1);
            prop_assert!((ab - ba).abs() < 1e-6);

            let ab = haversine_distance(lat1, lon1, lat2, lon2);
            let ba = haversine_distance(lat2, lon2, lat1, lon1);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        #[test]
        fn distance_is_finite_and_non_negative(
            lat1 in latitude(), lon1 in longitude(),
            lat2 in latitude(), lon2 in longitude()
        ) {
            for method in [DistanceMethod::Equirectangular, DistanceMethod::Haversine] {
                let d = method.distance(lat1, lon1, lat2, lon2);
                prop_assert!(d.is_finite());
                prop_assert!(d >= 0.0);
            }
        }

        #[test]
        fn methods_agree_within_a_city(
            lat in 40.0f64..=50.0f64,
            lon in -5.0f64..=8.0f64,
            dlat in -0.05f64..=0.05f64,
            dlon in -0.05f64..=0.05f64
        ) {
            let planar = estimate_distance(lat, lon, lat + dlat, lon + dlon);
            let sphere = haversine_distance(lat, lon, lat + dlat, lon + dlon);
            prop_assert!((planar - sphere).abs() < 5.0);
        }
    }
}

mod station_tests {
    use super::*;

    proptest! {
        #[test]
        fn free_stand_means_more_stands_than_bikes(bikes in 0u32..200, stands in 0u32..200) {
            let station = BikeStation::new("S", bikes, stands, 45.0, 4.0);
            prop_assert_eq!(station.has_free_stand(), stands > bikes);
            prop_assert_eq!(station.has_available_bike(), bikes > 0);
        }

        #[test]
        fn location_round_trips(lat in latitude(), lon in longitude()) {
            let station = BikeStation::new("S", 1, 2, lat, lon);
            prop_assert_eq!(station.location(), GeoLocation::new(lat, lon));
        }
    }
}
