use waypointkit_core::round_coordinate;
use waypointkit_designer::{
    DistanceCalculator, DrawKind, DrawingMode, GeoCoordinate, GeoMapper, PlannerState, Update,
    POLYGON_CREATOR_TITLE,
};

fn distance(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    DistanceCalculator::default().distance(a, b)
}

fn mapped(x: f64, y: f64) -> GeoCoordinate {
    GeoMapper::default().pixel_to_geo(x, y).unwrap()
}

#[test]
fn test_two_clicks_on_default_surface() {
    let mut state = PlannerState::default();
    state.start_drawing(DrawKind::Line);
    state.pointer_click(10.0, 10.0).unwrap();
    state.pointer_click(20.0, 20.0).unwrap();

    let waypoints = state.waypoints();
    assert_eq!(waypoints.len(), 2);
    let second = waypoints.get(1).unwrap();
    assert_eq!(
        second.coordinate.longitude(),
        round_coordinate(20.0 / 800.0 * 360.0 - 180.0)
    );
    assert_eq!(
        second.coordinate.latitude(),
        round_coordinate((1.0 - 20.0 / 600.0) * 180.0 - 90.0)
    );
    assert_eq!(waypoints.get(0).unwrap().distance_from_previous, 0.0);
    assert_eq!(
        second.distance_from_previous,
        distance(&mapped(10.0, 10.0), &mapped(20.0, 20.0))
    );
}

#[test]
fn test_mode_transitions() {
    let mut state = PlannerState::default();
    assert_eq!(state.mode(), DrawingMode::Idle);
    assert_eq!(state.commit_key(), Update::Unchanged);

    state.start_drawing(DrawKind::Line);
    assert_eq!(state.mode(), DrawingMode::DrawingLine);
    assert_eq!(state.commit_key(), Update::Changed);
    assert_eq!(state.mode(), DrawingMode::Idle);

    state.start_drawing(DrawKind::Polygon);
    assert_eq!(state.mode(), DrawingMode::DrawingPolygon);
    state.commit_key();
    assert_eq!(state.mode(), DrawingMode::Idle);
    // Draft stays on display after committing
    assert_eq!(state.kind(), Some(DrawKind::Polygon));
}

#[test]
fn test_restarting_line_keeps_waypoints() {
    let mut state = PlannerState::default();
    state.start_drawing(DrawKind::Line);
    state.pointer_click(10.0, 10.0).unwrap();
    state.commit_key();

    state.start_drawing(DrawKind::Line);
    assert!(state.raw_pixel_path().is_empty());
    state.pointer_click(30.0, 30.0).unwrap();
    assert_eq!(state.waypoints().len(), 2);
    assert_ne!(state.waypoints().get(1).unwrap().distance_from_previous, 0.0);
}

#[test]
fn test_polygon_commit_closes_draft() {
    let mut state = PlannerState::default();
    state.start_drawing(DrawKind::Polygon);
    for (x, y) in [(100.0, 100.0), (200.0, 100.0), (150.0, 200.0)] {
        state.pointer_click(x, y).unwrap();
    }
    state.commit_key();

    let coords = state.draft().coordinates();
    assert_eq!(coords.len(), 4);
    assert_eq!(coords[0], mapped(100.0, 100.0));
    assert_eq!(coords[3], coords[0]);
    assert!(state.waypoints().is_empty());

    let table = state.table();
    assert_eq!(table.title, POLYGON_CREATOR_TITLE);
    assert_eq!(table.rows[3].label, "P03");
}

#[test]
fn test_degenerate_polygon_commits() {
    let mut state = PlannerState::default();
    state.start_drawing(DrawKind::Polygon);
    state.commit_key();
    assert!(state.draft().is_empty());

    state.start_drawing(DrawKind::Polygon);
    state.pointer_click(10.0, 10.0).unwrap();
    state.commit_key();
    assert_eq!(state.draft().len(), 2);
    assert_eq!(state.draft().coordinates()[0], state.draft().coordinates()[1]);
}

#[test]
fn test_new_polygon_discards_draft() {
    let mut state = PlannerState::default();
    state.start_drawing(DrawKind::Polygon);
    state.pointer_click(10.0, 10.0).unwrap();
    state.start_drawing(DrawKind::Polygon);
    assert!(state.draft().is_empty());
}

#[test]
fn test_right_triangle_path() {
    let mut state = PlannerState::default();
    state.start_drawing(DrawKind::Line);
    for (x, y) in [(100.0, 100.0), (100.0, 300.0), (400.0, 300.0)] {
        state.pointer_click(x, y).unwrap();
    }
    state.commit_key();

    let table = state.table();
    assert_eq!(table.len(), 3);
    assert_eq!(
        table.rows[2].distance_meters,
        distance(&mapped(100.0, 300.0), &mapped(400.0, 300.0))
    );
    assert!(!state.frame().close_loop);
    assert_eq!(state.frame().committed.len(), 3);
}
