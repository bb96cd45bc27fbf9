use super::*;
use kurbo::PathEl;

const TRIANGLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20">
  <g transform="translate(10,0)">
    <path d="M1,2 L3,2 L3,4 Z" fill="black"/>
  </g>
  <path d="M0,0 L5,0 L5,5 L0,5 Z" fill="black"/>
</svg>"#;

#[test]
fn document_paths_collect_in_order_with_transform_and_flip() {
    let path = parse_svg_document(TRIANGLE_SVG.as_bytes()).unwrap();
    let first = path.elements()[0];
    assert_eq!(first, PathEl::MoveTo(Point::new(11.0, -2.0)));

    let move_tos = path
        .elements()
        .iter()
        .filter(|el| matches!(el, PathEl::MoveTo(_)))
        .count();
    assert_eq!(move_tos, 2);

    // triangle (3 with closing edge) + square (4 with closing edge)
    assert_eq!(split_path(&path, SegmentGranularity::PathSegments).len(), 7);
    assert_eq!(split_path(&path, SegmentGranularity::Subpaths).len(), 2);
}

#[test]
fn elements_keep_one_path_per_svg_path() {
    let elements = parse_svg_elements(TRIANGLE_SVG.as_bytes()).unwrap();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].elements()[0], PathEl::MoveTo(Point::new(11.0, -2.0)));
    assert_eq!(elements[1].elements()[0], PathEl::MoveTo(Point::new(0.0, 0.0)));

    let two_subpaths = parse_path_data("M0,0 L1,0 L1,1 Z M3,3 L4,3 L4,4 Z").unwrap();
    assert_eq!(split_path(&two_subpaths, SegmentGranularity::Subpaths).len(), 2);
    assert_eq!(split_path(&two_subpaths, SegmentGranularity::Elements).len(), 1);
}

#[test]
fn malformed_document_is_an_svg_error() {
    assert!(matches!(
        parse_svg_document(b"<svg"),
        Err(EpicycleError::Svg(_))
    ));
}

#[test]
fn path_data_is_flipped() {
    let path = parse_path_data("M1,2 L4,6").unwrap();
    assert_eq!(path.elements()[0], PathEl::MoveTo(Point::new(1.0, -2.0)));
    assert_eq!(path.elements()[1], PathEl::LineTo(Point::new(4.0, -6.0)));
    assert!(matches!(
        parse_path_data("M1,2 Q"),
        Err(EpicycleError::Svg(_))
    ));
}

#[test]
fn load_svg_reports_missing_files() {
    let err = load_svg(
        Path::new("target/definitely/missing.svg"),
        SegmentGranularity::PathSegments,
    )
    .unwrap_err();
    assert!(err.to_string().contains("missing.svg"));
}
