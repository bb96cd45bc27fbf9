use rayon::prelude::*;

use crate::{
    curve::sampler::polyline,
    foundation::core::{BezPath, Complex64, FrameIndex, FrameRange, Point, frame_to_t},
    foundation::error::{EpicycleError, EpicycleResult},
    foundation::pool::{Threading, build_thread_pool},
    fourier::{
        coeffs::{Coefficients, Term, partial_sum},
        epicycles::{Epicycle, chain_tip, epicycle_chain},
    },
};

/// Partial sum of order `n` at `steps` uniform parameter values `t = i / steps`.
pub fn trace_partial_sum(
    coeffs: &Coefficients,
    n: usize,
    steps: usize,
) -> EpicycleResult<Vec<Complex64>> {
    if steps == 0 {
        return Err(EpicycleError::validation("trace steps must be > 0"));
    }
    Ok((0..steps)
        .map(|i| partial_sum(coeffs, n, i as f64 / steps as f64))
        .collect())
}

/// [`trace_partial_sum`] as a closed polyline.
pub fn trace_path(coeffs: &Coefficients, n: usize, steps: usize) -> EpicycleResult<BezPath> {
    Ok(polyline(trace_partial_sum(coeffs, n, steps)?))
}

/// Epicycle state for one animation frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EpicycleFrame {
    /// Frame the state belongs to.
    pub frame: FrameIndex,
    /// Curve parameter for the frame.
    pub t: f64,
    /// Links in chain order.
    pub chain: Vec<Epicycle>,
    /// End of the chain (the traced point).
    pub tip: Point,
}

/// Evaluate the epicycle chain of `terms` for every frame in `range`.
///
/// Frame `f` maps to `t = (f mod frames_per_cycle) / frames_per_cycle`. Output follows frame
/// order whether or not the frames run on a worker pool.
#[tracing::instrument(skip(terms), fields(terms = terms.len()))]
pub fn precompute_frames(
    terms: &[Term],
    range: FrameRange,
    frames_per_cycle: u64,
    min_radius: f64,
    threading: &Threading,
) -> EpicycleResult<Vec<EpicycleFrame>> {
    if range.is_empty() {
        return Err(EpicycleError::validation("frame range must be non-empty"));
    }
    if frames_per_cycle == 0 {
        return Err(EpicycleError::validation("frames_per_cycle must be > 0"));
    }

    let len = usize::try_from(range.len_frames())
        .map_err(|_| EpicycleError::validation("frame range does not fit in memory"))?;
    let mut frames: Vec<FrameIndex> = Vec::with_capacity(len);
    frames.extend(range.iter());
    let eval = |frame: &FrameIndex| -> EpicycleResult<EpicycleFrame> {
        let t = frame_to_t(*frame, frames_per_cycle)?;
        let chain = epicycle_chain(terms, t, min_radius);
        let tip = chain_tip(&chain);
        Ok(EpicycleFrame {
            frame: *frame,
            t,
            chain,
            tip,
        })
    };

    let out = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| frames.par_iter().map(eval).collect::<EpicycleResult<Vec<_>>>())?
    } else {
        frames.iter().map(eval).collect::<EpicycleResult<Vec<_>>>()?
    };

    tracing::debug!(frames = out.len(), "precomputed epicycle frames");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/trace.rs"]
mod tests;
