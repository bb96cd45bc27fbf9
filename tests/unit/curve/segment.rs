use super::*;
use approx::assert_abs_diff_eq;
use kurbo::Line;

fn square() -> BezPath {
    BezPath::from_svg("M0,0 L2,0 L2,2 L0,2 Z").unwrap()
}

#[test]
fn line_segment_evaluates_endpoints_and_midpoint() {
    let seg = Segment::from(PathSeg::Line(Line::new((0.0, 0.0), (4.0, 2.0))));
    assert_eq!(seg.point(0.0), Point::new(0.0, 0.0));
    assert_eq!(seg.point(0.5), Point::new(2.0, 1.0));
    assert_eq!(seg.point(1.0), Point::new(4.0, 2.0));
    assert_eq!(seg.point(7.0), Point::new(4.0, 2.0));
}

#[test]
fn closed_square_splits_into_four_segments() {
    let segs = segments_of(&square());
    assert_eq!(segs.len(), 4);
    assert_eq!(segs[3].point(1.0), Point::new(0.0, 0.0));
}

#[test]
fn subpath_parameter_follows_arc_length_on_equal_sides() {
    let subs = subpaths_of(&square());
    assert_eq!(subs.len(), 1);
    let sub = &subs[0];
    assert_eq!(sub.point(0.0), Point::new(0.0, 0.0));
    assert_eq!(sub.point(0.25), Point::new(2.0, 0.0));
    assert_eq!(sub.point(0.5), Point::new(2.0, 2.0));
    assert_eq!(sub.point(0.625), Point::new(1.0, 2.0));
    assert_eq!(sub.point(1.0), Point::new(0.0, 0.0));
}

#[test]
fn subpath_parameter_follows_arc_length_on_unequal_sides() {
    let path = BezPath::from_svg("M0,0 L100,0 L100,1 Z").unwrap();
    let subs = subpaths_of(&path);
    let Segment::Subpath(sub) = &subs[0] else {
        panic!("expected a subpath piece");
    };
    let total = 101.0 + 10001f64.sqrt();
    assert_abs_diff_eq!(sub.length(), total, epsilon = 1e-9);

    let p = subs[0].point(50.0 / total);
    assert_abs_diff_eq!(p.x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-9);

    let p = subs[0].point(100.5 / total);
    assert_abs_diff_eq!(p.x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.y, 0.5, epsilon = 1e-9);

    // Half the samples land on the long edge, matching its share of the perimeter.
    let on_long_edge = (0..30)
        .map(|i| subs[0].point(i as f64 / 29.0))
        .filter(|p| p.y == 0.0 && p.x > 0.0)
        .count();
    assert_eq!(on_long_edge, 14);
}

#[test]
fn zero_length_subpath_still_evaluates() {
    let path = BezPath::from_svg("M2,3 L2,3 L2,3").unwrap();
    let subs = subpaths_of(&path);
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].point(0.7), Point::new(2.0, 3.0));
}

#[test]
fn element_keeps_every_subpath_in_one_piece() {
    let path = BezPath::from_svg("M0,0 L1,0 L1,1 Z M5,5 L6,5 L6,6 Z").unwrap();
    let pieces = element_of(&path);
    assert_eq!(pieces.len(), 1);
    let Segment::Subpath(sub) = &pieces[0] else {
        panic!("expected a subpath piece");
    };
    assert_eq!(sub.segment_count(), 6);
    assert_eq!(pieces[0].point(0.0), Point::new(0.0, 0.0));
    assert_eq!(pieces[0].point(1.0), Point::new(5.0, 5.0));
}

#[test]
fn move_to_starts_a_new_subpath() {
    let path = BezPath::from_svg("M0,0 L1,0 L1,1 Z M5,5 L6,5 L6,6 Z").unwrap();
    let subs = subpaths_of(&path);
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[1].point(0.0), Point::new(5.0, 5.0));
}

#[test]
fn lone_move_to_yields_nothing() {
    let path = BezPath::from_svg("M3,3").unwrap();
    assert!(subpaths_of(&path).is_empty());
    assert!(segments_of(&path).is_empty());
}
