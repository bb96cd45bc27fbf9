use crate::{
    foundation::core::Complex64,
    foundation::error::{EpicycleError, EpicycleResult},
};

/// Resample a closed polyline to `count` points spaced evenly by arc length.
///
/// The polyline is closed back to its first point before measuring, and the output starts at
/// `points[0]` with the period endpoint excluded, matching the uniform-parameter model of a
/// sample sequence. A zero-length input yields `count` copies of its only position.
pub fn resample_by_arc_length(
    points: &[Complex64],
    count: usize,
) -> EpicycleResult<Vec<Complex64>> {
    let Some(&first) = points.first() else {
        return Err(EpicycleError::empty_input("no points to resample"));
    };
    if count == 0 {
        return Err(EpicycleError::validation("resample count must be > 0"));
    }

    let ring: Vec<Complex64> = points.iter().copied().chain(std::iter::once(first)).collect();
    let mut cumulative = Vec::with_capacity(ring.len());
    cumulative.push(0.0);
    for pair in ring.windows(2) {
        let last = cumulative[cumulative.len() - 1];
        cumulative.push(last + (pair[1] - pair[0]).norm());
    }

    let total = cumulative[cumulative.len() - 1];
    if total <= 0.0 {
        return Ok(vec![first; count]);
    }

    let mut out = Vec::with_capacity(count);
    let mut i = 1;
    for k in 0..count {
        let target = total * k as f64 / count as f64;
        while i < cumulative.len() - 1 && cumulative[i] < target {
            i += 1;
        }
        let span = cumulative[i] - cumulative[i - 1];
        let f = if span > 0.0 {
            (target - cumulative[i - 1]) / span
        } else {
            0.0
        };
        out.push(ring[i - 1] * (1.0 - f) + ring[i] * f);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/resample.rs"]
mod tests;
