use std::{f64::consts::TAU, fmt, sync::Arc};

use crate::{
    curve::segment::Segment,
    foundation::core::{BezPath, Complex64, Point, to_complex, to_point},
    foundation::error::{EpicycleError, EpicycleResult},
};

/// Minimum number of samples drawn from each path segment.
pub const MIN_SAMPLES_PER_SEGMENT: usize = 10;

/// Parameter range a parametric function expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamDomain {
    /// `t ∈ [0, 1)`.
    Unit,
    /// `t ∈ [0, 2π)`.
    Angle,
}

impl ParamDomain {
    fn span(self) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::Angle => TAU,
        }
    }
}

/// Closed-form curve `f(t) -> (x, y)` over one period.
#[derive(Clone)]
pub struct ParametricCurve {
    f: Arc<dyn Fn(f64) -> Point + Send + Sync>,
    domain: ParamDomain,
}

impl ParametricCurve {
    /// Wrap `f`, which is evaluated over `domain`.
    pub fn new(domain: ParamDomain, f: impl Fn(f64) -> Point + Send + Sync + 'static) -> Self {
        Self {
            f: Arc::new(f),
            domain,
        }
    }

    /// Domain the function is evaluated over.
    pub fn domain(&self) -> ParamDomain {
        self.domain
    }

    /// Evaluate at a raw parameter value in the curve's own domain.
    pub fn eval(&self, t: f64) -> Point {
        (self.f)(t)
    }
}

impl fmt::Debug for ParametricCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametricCurve")
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

/// Input a sample sequence is drawn from.
#[derive(Clone, Debug)]
pub enum CurveSource {
    /// Closed-form parametric curve.
    Parametric(ParametricCurve),
    /// Path segments from vector-graphics data, traversed in order.
    Segments(Vec<Segment>),
}

impl CurveSource {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parametric(_) => "parametric",
            Self::Segments(_) => "segments",
        }
    }
}

impl From<ParametricCurve> for CurveSource {
    fn from(curve: ParametricCurve) -> Self {
        Self::Parametric(curve)
    }
}

/// Centered, unit-normalized samples of one traversal of a closed curve.
///
/// Index `k` stands for the parameter `k / len`; the sequence is periodic.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Samples {
    points: Vec<Complex64>,
}

impl Samples {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a sequence built by [`sample`] or [`center_and_normalize`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The samples as complex numbers.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.points
    }

    /// Iterate the samples in order.
    pub fn iter(&self) -> impl Iterator<Item = &Complex64> {
        self.points.iter()
    }

    /// The samples as plane points.
    pub fn to_points(&self) -> Vec<Point> {
        self.points.iter().copied().map(to_point).collect()
    }

    /// Closed polyline through every sample, for drawing the reference curve.
    pub fn to_bez_path(&self) -> BezPath {
        polyline(self.points.iter().copied())
    }
}

impl AsRef<[Complex64]> for Samples {
    fn as_ref(&self) -> &[Complex64] {
        &self.points
    }
}

pub(crate) fn polyline(points: impl IntoIterator<Item = Complex64>) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.into_iter();
    if let Some(first) = iter.next() {
        path.move_to(to_point(first));
        for z in iter {
            path.line_to(to_point(z));
        }
        path.close_path();
    }
    path
}

/// Sample `source` into a centered, unit-normalized sequence.
///
/// Parametric sources yield exactly `count` samples at `t = j / count` (endpoint excluded).
/// Segment sources yield `max(10, count / segments)` samples per segment, both endpoints
/// included, so the total is only approximately `count`.
#[tracing::instrument(skip(source), fields(kind = source.kind()))]
pub fn sample(source: &CurveSource, count: usize) -> EpicycleResult<Samples> {
    let raw = match source {
        CurveSource::Parametric(curve) => sample_parametric(curve, count)?,
        CurveSource::Segments(segments) => sample_segments(segments, count)?,
    };
    tracing::debug!(requested = count, produced = raw.len(), "sampled curve");
    center_and_normalize(raw)
}

fn sample_parametric(curve: &ParametricCurve, count: usize) -> EpicycleResult<Vec<Complex64>> {
    if count == 0 {
        return Err(EpicycleError::empty_input(
            "parametric source sampled with count 0",
        ));
    }
    let span = curve.domain.span();
    Ok((0..count)
        .map(|j| to_complex(curve.eval(span * j as f64 / count as f64)))
        .collect())
}

fn sample_segments(segments: &[Segment], count: usize) -> EpicycleResult<Vec<Complex64>> {
    if segments.is_empty() {
        return Err(EpicycleError::empty_input("source has no path segments"));
    }
    let per_segment = MIN_SAMPLES_PER_SEGMENT.max(count / segments.len());
    let last = (per_segment - 1) as f64;

    let mut out = Vec::with_capacity(per_segment * segments.len());
    for seg in segments {
        out.extend((0..per_segment).map(|i| to_complex(seg.point(i as f64 / last))));
    }
    Ok(out)
}

/// Subtract the centroid, then scale so the farthest sample lies on the unit circle.
pub fn center_and_normalize(mut points: Vec<Complex64>) -> EpicycleResult<Samples> {
    if points.is_empty() {
        return Err(EpicycleError::empty_input("no samples to normalize"));
    }
    if points.iter().any(|z| !z.is_finite()) {
        return Err(EpicycleError::degenerate_curve("curve has non-finite samples"));
    }
    let first = points[0];
    if points.iter().all(|z| *z == first) {
        return Err(EpicycleError::degenerate_curve(format!(
            "all {} samples coincide",
            points.len()
        )));
    }

    let n = points.len() as f64;
    let mean_re = points.iter().map(|z| z.re).sum::<f64>() / n;
    let mean_im = points.iter().map(|z| z.im).sum::<f64>() / n;

    let centroid = Complex64::new(mean_re, mean_im);
    for z in &mut points {
        *z -= centroid;
    }

    // Distinct inputs cannot all equal the rounded centroid, so this is > 0 here.
    let scale = points.iter().map(|z| z.norm()).fold(0.0, f64::max);
    for z in &mut points {
        *z /= scale;
    }

    tracing::debug!(samples = points.len(), scale, "normalized samples");
    Ok(Samples { points })
}

#[cfg(test)]
#[path = "../../tests/unit/curve/sampler.rs"]
mod tests;
