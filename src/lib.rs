//! Epicycle computes Fourier-series approximations of closed planar curves.
//!
//! A curve (a parametric preset such as the heart, or the paths of an SVG document) is turned
//! into a periodic sample sequence, decomposed into complex Fourier coefficients, and rebuilt
//! as truncated partial sums or as chains of rotating vectors ("epicycles"). Drawing and frame
//! output are left to the caller; this crate produces the geometry.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `CurveSource -> Samples` (centered, scaled into the unit disk)
//! 2. **Analyze**: `Samples + K -> Coefficients` (`c_n` for every `n ∈ [-K, K]`)
//! 3. **Reconstruct**: `Coefficients + N + t -> point` ([`partial_sum`]), or an ordered term
//!    list folded into an [`Epicycle`] chain ([`epicycle_chain`])
//! 4. **Batch** (optional): partial-sum polylines and per-frame chains, optionally on a rayon
//!    worker pool
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: coefficients are identical whether the loop over `n` runs sequentially
//!   or on a worker pool.
//! - **Immutable results**: samples and coefficients never change after construction and are
//!   safe to share across threads.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod curve;
mod foundation;
mod fourier;

pub use config::settings::AnalysisConfig;
pub use curve::presets::{Preset, flower, heart, spiral};
pub use curve::resample::resample_by_arc_length;
pub use curve::sampler::{
    CurveSource, MIN_SAMPLES_PER_SEGMENT, ParamDomain, ParametricCurve, Samples,
    center_and_normalize, sample,
};
pub use curve::segment::{Segment, Subpath, element_of, segments_of, subpaths_of};
pub use curve::svg::{
    SegmentGranularity, load_svg, parse_path_data, parse_svg_document, parse_svg_elements,
    split_path,
};
pub use foundation::core::{
    Affine, BezPath, Complex64, FrameIndex, FrameRange, PathSeg, Point, Vec2, frame_to_t,
    to_complex, to_point,
};
pub use foundation::error::{EpicycleError, EpicycleResult};
pub use foundation::pool::Threading;
pub use fourier::coeffs::{
    Coefficients, Term, compute_coefficients, compute_coefficients_with, partial_sum,
};
pub use fourier::epicycles::{DEFAULT_MIN_RADIUS, Epicycle, chain_tip, epicycle_chain};
pub use fourier::select::{SelectMode, by_order, epicycle_order, ranked, select, top_terms};
pub use fourier::trace::{EpicycleFrame, precompute_frames, trace_partial_sum, trace_path};
