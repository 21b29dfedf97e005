use waypointkit_designer::{
    DistanceCalculator, DrawKind, DrawingMode, GeoCoordinate, GeoMapper, InsertPosition,
    PlannerOptions, PlannerState, Update, MISSION_PLANNER_TITLE,
};

fn distance(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    DistanceCalculator::default().distance(a, b)
}

const LINE: [(f64, f64); 3] = [(100.0, 100.0), (300.0, 100.0), (500.0, 100.0)];
const TRIANGLE: [(f64, f64); 3] = [(200.0, 300.0), (250.0, 400.0), (150.0, 400.0)];

fn mapped(x: f64, y: f64) -> GeoCoordinate {
    GeoMapper::default().pixel_to_geo(x, y).unwrap()
}

fn planner_with_line(options: PlannerOptions) -> PlannerState {
    let mut state = PlannerState::new(options).unwrap();
    state.start_drawing(DrawKind::Line);
    for (x, y) in LINE {
        state.pointer_click(x, y).unwrap();
    }
    state.commit_key();
    state
}

fn draw_triangle(state: &mut PlannerState) {
    for (x, y) in TRIANGLE {
        state.pointer_click(x, y).unwrap();
    }
    state.commit_key();
}

#[test]
fn test_import_without_pending_insertion_is_ignored() {
    let mut state = planner_with_line(PlannerOptions::default());
    state.start_drawing(DrawKind::Polygon);
    draw_triangle(&mut state);

    let before = state.waypoints().as_slice().to_vec();
    assert_eq!(state.import_points(), Update::Unchanged);
    assert_eq!(state.waypoints().as_slice(), before.as_slice());
    assert_eq!(state.draft().len(), 4);
}

#[test]
fn test_choose_insertion_requires_selection() {
    let mut state = planner_with_line(PlannerOptions::default());
    assert_eq!(state.choose_insertion(InsertPosition::After), Update::Unchanged);
    assert_eq!(state.pending_insertion_index(), None);
}

#[test]
fn test_import_after_selected_row() {
    let mut state = planner_with_line(PlannerOptions::default());
    let former_last = *state.waypoints().get(2).unwrap();

    state.select_row(1);
    state.choose_insertion(InsertPosition::After);
    assert_eq!(state.pending_insertion_index(), Some(1));
    assert_eq!(state.selected_row(), None);
    assert_eq!(state.kind(), Some(DrawKind::Polygon));

    draw_triangle(&mut state);
    assert_eq!(state.import_points(), Update::Changed);

    let waypoints = state.waypoints();
    assert_eq!(waypoints.len(), 7);
    assert_eq!(waypoints.get(2).unwrap().coordinate, mapped(200.0, 300.0));
    assert_eq!(waypoints.get(2).unwrap().distance_from_previous, 0.0);
    assert_eq!(
        waypoints.get(3).unwrap().distance_from_previous,
        distance(&mapped(200.0, 300.0), &mapped(250.0, 400.0))
    );
    // Closing point repeats the first polygon point
    assert_eq!(waypoints.get(5).unwrap().coordinate, mapped(200.0, 300.0));
    assert_eq!(*waypoints.get(6).unwrap(), former_last);

    assert!(state.draft().is_empty());
    assert_eq!(state.pending_insertion_index(), None);
    assert_eq!(state.kind(), Some(DrawKind::Line));

    let table = state.table();
    assert_eq!(table.title, MISSION_PLANNER_TITLE);
    let labels: Vec<_> = table.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["WP00", "WP01", "WP02", "WP03", "WP04", "WP05", "WP06"]);
}

#[test]
fn test_before_behaves_like_after_by_default() {
    let mut after = planner_with_line(PlannerOptions::default());
    after.select_row(1);
    after.choose_insertion(InsertPosition::After);
    draw_triangle(&mut after);
    after.import_points();

    let mut before = planner_with_line(PlannerOptions::default());
    before.select_row(1);
    before.choose_insertion(InsertPosition::Before);
    draw_triangle(&mut before);
    before.import_points();

    assert_eq!(before.waypoints().as_slice(), after.waypoints().as_slice());
}

#[test]
fn test_before_can_splice_ahead_of_row() {
    let options = PlannerOptions {
        insert_before_splices_before: true,
        ..PlannerOptions::default()
    };

    let mut state = planner_with_line(options.clone());
    state.select_row(1);
    state.choose_insertion(InsertPosition::Before);
    draw_triangle(&mut state);
    state.import_points();
    assert_eq!(state.waypoints().get(1).unwrap().coordinate, mapped(200.0, 300.0));
    assert_eq!(state.waypoints().get(5).unwrap().coordinate, mapped(300.0, 100.0));

    let mut head = planner_with_line(options);
    head.select_row(0);
    head.choose_insertion(InsertPosition::Before);
    draw_triangle(&mut head);
    head.import_points();
    assert_eq!(head.waypoints().get(0).unwrap().coordinate, mapped(200.0, 300.0));
    assert_eq!(head.waypoints().get(4).unwrap().coordinate, mapped(100.0, 100.0));
}

#[test]
fn test_new_insertion_discards_unimported_draft() {
    let mut state = planner_with_line(PlannerOptions::default());
    state.select_row(0);
    state.choose_insertion(InsertPosition::After);
    draw_triangle(&mut state);

    // Back to the waypoint table to pick another row
    state.start_drawing(DrawKind::Line);
    state.commit_key();
    state.select_row(2);
    state.choose_insertion(InsertPosition::After);
    assert!(state.draft().is_empty());
    assert_eq!(state.pending_insertion_index(), Some(2));
}

#[test]
fn test_empty_draft_is_not_imported() {
    let mut state = planner_with_line(PlannerOptions::default());
    state.select_row(0);
    state.choose_insertion(InsertPosition::After);
    state.commit_key();
    assert_eq!(state.import_points(), Update::Unchanged);
    assert_eq!(state.waypoints().len(), 3);
    assert_eq!(state.pending_insertion_index(), Some(0));
}

#[test]
fn test_import_before_commit_keeps_drawing_the_line() {
    let mut state = planner_with_line(PlannerOptions::default());
    state.select_row(0);
    state.choose_insertion(InsertPosition::After);
    state.pointer_click(200.0, 300.0).unwrap();
    state.pointer_click(250.0, 400.0).unwrap();

    assert_eq!(state.import_points(), Update::Changed);
    assert_eq!(state.mode(), DrawingMode::DrawingLine);
    assert_eq!(state.kind(), Some(DrawKind::Line));
    assert_eq!(state.table().title, MISSION_PLANNER_TITLE);
    assert_eq!(state.waypoints().len(), 5);

    // The next click extends the displayed path, not the consumed draft
    state.pointer_click(400.0, 400.0).unwrap();
    assert!(state.draft().is_empty());
    assert_eq!(state.waypoints().len(), 6);
    assert_eq!(state.table().len(), 6);
    let last = state.waypoints().last().unwrap();
    assert_eq!(last.coordinate, mapped(400.0, 400.0));
    assert_eq!(
        last.distance_from_previous,
        distance(&mapped(500.0, 100.0), &mapped(400.0, 400.0))
    );

    state.commit_key();
    assert_eq!(state.mode(), DrawingMode::Idle);
    assert!(state.draft().is_empty());
    assert_eq!(state.waypoints().len(), 6);
    assert!(!state.frame().close_loop);
}
