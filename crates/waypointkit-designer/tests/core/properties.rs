use proptest::prelude::*;
use waypointkit_designer::{distance, DrawKind, GeoCoordinate, PlannerState};

fn coordinate() -> impl Strategy<Value = GeoCoordinate> {
    (-180.0f64..=180.0, -90.0f64..=90.0).prop_map(|(lon, lat)| GeoCoordinate::new(lon, lat).unwrap())
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        prop_assert_eq!(distance(Some(&a), Some(&b)), distance(Some(&b), Some(&a)));
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert_eq!(distance(Some(&a), Some(&a)), 0.0);
    }

    #[test]
    fn distance_is_bounded(a in coordinate(), b in coordinate()) {
        let d = distance(Some(&a), Some(&b));
        prop_assert!(d >= 0.0);
        prop_assert!(d <= 20_037_509.0);
    }

    #[test]
    fn every_click_becomes_a_waypoint(
        clicks in prop::collection::vec((0.0f64..800.0, 0.0f64..600.0), 0..20)
    ) {
        let mut state = PlannerState::default();
        state.start_drawing(DrawKind::Line);
        for &(x, y) in &clicks {
            state.pointer_click(x, y).unwrap();
        }
        state.commit_key();

        let waypoints = state.waypoints();
        prop_assert_eq!(waypoints.len(), clicks.len());
        if let Some(first) = waypoints.get(0) {
            prop_assert_eq!(first.distance_from_previous, 0.0);
        }
        for (i, row) in state.table().rows.iter().enumerate() {
            prop_assert_eq!(&row.label, &format!("WP{:02}", i));
        }
    }
}
