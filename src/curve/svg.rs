use std::path::Path;

use anyhow::Context as _;
use usvg::tiny_skia_path::PathSegment;

use crate::{
    curve::{
        sampler::CurveSource,
        segment::{Segment, element_of, segments_of, subpaths_of},
    },
    foundation::core::{Affine, BezPath, Point},
    foundation::error::{EpicycleError, EpicycleResult},
};

/// How path geometry is split into the pieces the sampler draws from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentGranularity {
    /// One piece per line/quad/cubic segment.
    #[default]
    PathSegments,
    /// One piece per subpath (a new piece at every `MoveTo`).
    Subpaths,
    /// One piece per path element, spanning all of its subpaths.
    Elements,
}

/// Split `path` into sampler pieces.
pub fn split_path(path: &BezPath, granularity: SegmentGranularity) -> Vec<Segment> {
    match granularity {
        SegmentGranularity::PathSegments => segments_of(path),
        SegmentGranularity::Subpaths => subpaths_of(path),
        SegmentGranularity::Elements => element_of(path),
    }
}

/// Parse an SVG document and collect every path, in document order, into one path.
///
/// Each path's absolute transform is applied and the y axis is flipped so the geometry
/// reads upright in a y-up plane.
pub fn parse_svg_document(bytes: &[u8]) -> EpicycleResult<BezPath> {
    let mut out = BezPath::new();
    for element in parse_svg_elements(bytes)? {
        out.extend(element);
    }
    Ok(out)
}

/// Like [`parse_svg_document`], but keeps one path per `<path>` element.
pub fn parse_svg_elements(bytes: &[u8]) -> EpicycleResult<Vec<BezPath>> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts)
        .map_err(|e| EpicycleError::svg(format!("parse svg tree: {e}")))?;

    let mut out = Vec::new();
    collect_group(tree.root(), &mut out);
    for element in &mut out {
        element.apply_affine(Affine::FLIP_Y);
    }
    tracing::debug!(elements = out.len(), "collected svg paths");
    Ok(out)
}

/// Parse SVG path data (`d` attribute), flipping the y axis like [`parse_svg_document`].
pub fn parse_path_data(d: &str) -> EpicycleResult<BezPath> {
    let mut path = BezPath::from_svg(d)
        .map_err(|e| EpicycleError::svg(format!("invalid svg path data: {e}")))?;
    path.apply_affine(Affine::FLIP_Y);
    Ok(path)
}

/// Read an SVG file and turn its paths into a segment source.
pub fn load_svg(path: &Path, granularity: SegmentGranularity) -> EpicycleResult<CurveSource> {
    let bytes = std::fs::read(path).with_context(|| format!("read svg '{}'", path.display()))?;
    let segments: Vec<Segment> = parse_svg_elements(&bytes)?
        .iter()
        .flat_map(|element| split_path(element, granularity))
        .collect();
    if segments.is_empty() {
        return Err(EpicycleError::empty_input(format!(
            "svg '{}' contains no path segments",
            path.display()
        )));
    }
    Ok(CurveSource::Segments(segments))
}

fn collect_group(group: &usvg::Group, out: &mut Vec<BezPath>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => collect_group(g.as_ref(), out),
            usvg::Node::Path(p) => {
                let element = convert_path(p.as_ref());
                if !element.elements().is_empty() {
                    out.push(element);
                }
            }
            _ => {}
        }
    }
}

fn convert_path(path: &usvg::Path) -> BezPath {
    let ts = path.abs_transform();
    let affine = Affine::new([
        f64::from(ts.sx),
        f64::from(ts.ky),
        f64::from(ts.kx),
        f64::from(ts.sy),
        f64::from(ts.tx),
        f64::from(ts.ty),
    ]);
    let mut out = BezPath::new();
    let pt = |p: usvg::tiny_skia_path::Point| affine * Point::new(f64::from(p.x), f64::from(p.y));

    for seg in path.data().segments() {
        match seg {
            PathSegment::MoveTo(p) => out.move_to(pt(p)),
            PathSegment::LineTo(p) => out.line_to(pt(p)),
            PathSegment::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathSegment::CubicTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathSegment::Close => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/curve/svg.rs"]
mod tests;
