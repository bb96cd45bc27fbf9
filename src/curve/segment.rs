use kurbo::{ParamCurve, ParamCurveArclen, PathEl};

use crate::foundation::core::{BezPath, PathSeg, Point};

/// One piece of a vector-graphics path that can be evaluated at `t ∈ [0, 1]`.
#[derive(Clone, Debug)]
pub enum Segment {
    /// A single line, quadratic or cubic segment.
    Seg(PathSeg),
    /// A run of segments (a subpath or a whole path element); `t` follows arc length.
    Subpath(Subpath),
}

impl Segment {
    /// Evaluate the segment at `t`, clamped to `[0, 1]`.
    pub fn point(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Seg(seg) => seg.eval(t),
            Self::Subpath(sub) => sub.point(t),
        }
    }
}

impl From<PathSeg> for Segment {
    fn from(seg: PathSeg) -> Self {
        Self::Seg(seg)
    }
}

// Absolute tolerance for per-segment arc length.
const ARCLEN_ACCURACY: f64 = 1e-9;

/// Segments evaluated as one piece, parameterized by arc length.
///
/// `t` selects the point at fraction `t` of the total length; within a segment the local
/// parameter is the fraction of that segment's length covered.
#[derive(Clone, Debug)]
pub struct Subpath {
    segs: Vec<PathSeg>,
    // Cumulative length at the end of each segment.
    ends: Vec<f64>,
}

impl Subpath {
    /// Returns `None` for a subpath without any drawable segment.
    pub fn new(segs: Vec<PathSeg>) -> Option<Self> {
        if segs.is_empty() {
            return None;
        }
        let ends = segs
            .iter()
            .scan(0.0, |acc, seg| {
                *acc += seg.arclen(ARCLEN_ACCURACY);
                Some(*acc)
            })
            .collect();
        Some(Self { segs, ends })
    }

    /// Number of underlying segments.
    pub fn segment_count(&self) -> usize {
        self.segs.len()
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    fn point(&self, t: f64) -> Point {
        let n = self.segs.len();
        let total = self.length();
        if total <= 0.0 {
            // Zero-length run: spread t over segment indices.
            let scaled = t * n as f64;
            let idx = (scaled.floor() as usize).min(n - 1);
            return self.segs[idx].eval(scaled - idx as f64);
        }

        let target = t * total;
        let idx = self.ends.partition_point(|&end| end < target).min(n - 1);
        let start = if idx == 0 { 0.0 } else { self.ends[idx - 1] };
        let len = self.ends[idx] - start;
        let local = if len > 0.0 {
            ((target - start) / len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.segs[idx].eval(local)
    }
}

/// Split a path into per-segment pieces in path order.
pub fn segments_of(path: &BezPath) -> Vec<Segment> {
    path.segments().map(Segment::Seg).collect()
}

/// Split a path into one piece per subpath (`MoveTo` starts a new one).
pub fn subpaths_of(path: &BezPath) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut current = BezPath::new();
    for el in path.elements() {
        if matches!(el, PathEl::MoveTo(_)) && !current.elements().is_empty() {
            push_subpath(&mut out, &current);
            current = BezPath::new();
        }
        current.push(*el);
    }
    push_subpath(&mut out, &current);
    out
}

/// Treat the whole path, across `MoveTo`s, as a single piece.
pub fn element_of(path: &BezPath) -> Vec<Segment> {
    let mut out = Vec::new();
    push_subpath(&mut out, path);
    out
}

fn push_subpath(out: &mut Vec<Segment>, path: &BezPath) {
    if let Some(sub) = Subpath::new(path.segments().collect()) {
        out.push(Segment::Subpath(sub));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/segment.rs"]
mod tests;
