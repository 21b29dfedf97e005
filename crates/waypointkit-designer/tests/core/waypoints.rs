use waypointkit_designer::{DistanceCalculator, GeoCoordinate, LabelStyle, WaypointSequence};

fn distance(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    DistanceCalculator::default().distance(a, b)
}

fn coord(lon: f64, lat: f64) -> GeoCoordinate {
    GeoCoordinate::new(lon, lat).unwrap()
}

fn sequence_of(coords: &[(f64, f64)]) -> WaypointSequence {
    let mut seq = WaypointSequence::default();
    for &(lon, lat) in coords {
        seq.append(coord(lon, lat));
    }
    seq
}

#[test]
fn test_append_measures_against_last() {
    let seq = sequence_of(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    assert_eq!(seq.get(0).unwrap().distance_from_previous, 0.0);
    assert_eq!(
        seq.get(2).unwrap().distance_from_previous,
        distance(&coord(1.0, 0.0), &coord(1.0, 1.0))
    );
}

#[test]
fn test_splice_after_middle_row() {
    let mut seq = sequence_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    let former_last = *seq.get(2).unwrap();

    let inserted = seq.splice_after(Some(1), &[coord(5.0, 5.0), coord(6.0, 5.0)]);

    assert_eq!(seq.len(), 5);
    assert_eq!(inserted.len(), 2);
    assert_eq!(seq.get(2).unwrap().coordinate, coord(5.0, 5.0));
    assert_eq!(seq.get(3).unwrap().coordinate, coord(6.0, 5.0));
    // The waypoint formerly at index 2 moved to 4, untouched
    assert_eq!(*seq.get(4).unwrap(), former_last);
    assert_eq!(seq.label(4).as_deref(), Some("WP04"));
}

#[test]
fn test_splice_distances_are_within_run() {
    let mut seq = sequence_of(&[(0.0, 0.0), (1.0, 0.0)]);
    let run = [coord(10.0, 10.0), coord(11.0, 10.0), coord(11.0, 11.0)];
    seq.splice_after(Some(0), &run);

    assert_eq!(seq.get(1).unwrap().distance_from_previous, 0.0);
    assert_eq!(
        seq.get(2).unwrap().distance_from_previous,
        distance(&run[0], &run[1])
    );
    assert_eq!(
        seq.get(3).unwrap().distance_from_previous,
        distance(&run[1], &run[2])
    );
}

#[test]
fn test_splice_edges() {
    let mut seq = sequence_of(&[(0.0, 0.0)]);
    seq.splice_after(None, &[coord(9.0, 9.0)]);
    assert_eq!(seq.get(0).unwrap().coordinate, coord(9.0, 9.0));

    seq.splice_after(Some(42), &[coord(8.0, 8.0)]);
    assert_eq!(seq.last().unwrap().coordinate, coord(8.0, 8.0));
    assert_eq!(seq.len(), 3);

    let inserted = seq.splice_after(Some(0), &[]);
    assert!(inserted.is_empty());
    assert_eq!(seq.len(), 3);
}

#[test]
fn test_labels_always_contiguous() {
    let mut seq = sequence_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    seq.splice_after(Some(0), &[coord(3.0, 3.0), coord(4.0, 4.0)]);
    let labels: Vec<String> = seq.labelled().map(|(label, _)| label).collect();
    assert_eq!(labels, ["WP00", "WP01", "WP02", "WP03", "WP04"]);
    assert_eq!(seq.label(5), None);
}

#[test]
fn test_custom_labels_and_accuracy() {
    let calc = DistanceCalculator::new(Default::default(), 1000.0);
    let mut seq = WaypointSequence::with_labels(calc, LabelStyle::new("N", 3));
    seq.append(coord(0.0, 0.0));
    seq.append(coord(1.0, 0.0));
    assert_eq!(seq.label(1).as_deref(), Some("N001"));
    assert_eq!(seq.get(1).unwrap().distance_from_previous, 111_000.0);
    assert_eq!(seq.total_distance(), 111_000.0);
}

#[test]
fn test_clear() {
    let mut seq = sequence_of(&[(0.0, 0.0), (1.0, 0.0)]);
    seq.clear();
    assert!(seq.is_empty());
    assert_eq!(seq.append(coord(2.0, 2.0)).distance_from_previous, 0.0);
}
