use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::{
    foundation::core::{Complex64, Point, to_point},
    foundation::error::{EpicycleError, EpicycleResult},
    foundation::pool::{Threading, build_thread_pool},
};

/// One Fourier term: frequency index and complex amplitude.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Term {
    /// Frequency index (turns per period, signed).
    pub n: i64,
    /// Complex amplitude `c_n`.
    pub c: Complex64,
}

impl Term {
    /// `|c_n|`, the epicycle radius.
    pub fn magnitude(&self) -> f64 {
        self.c.norm()
    }

    /// `arg(c_n)`, the epicycle phase at `t = 0`.
    pub fn phase(&self) -> f64 {
        self.c.arg()
    }

    /// Contribution `c_n · exp(2πi·n·t)` at parameter `t`.
    pub fn at(&self, t: f64) -> Complex64 {
        self.c * Complex64::from_polar(1.0, TAU * self.n as f64 * t)
    }
}

/// Immutable Fourier coefficients `c_n` for every `n ∈ [-K, K]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Coefficients {
    order: usize,
    // values[n + K]
    values: Vec<Complex64>,
}

impl Coefficients {
    /// Truncation bound `K` the set was computed with.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of coefficients (`2K + 1`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never `true`: `n = 0` is always present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `c_n`, or `None` when `|n| > K`.
    pub fn get(&self, n: i64) -> Option<Complex64> {
        let idx = n.checked_add(self.order as i64)?;
        usize::try_from(idx)
            .ok()
            .and_then(|i| self.values.get(i))
            .copied()
    }

    /// Terms in ascending `n`.
    pub fn iter(&self) -> impl Iterator<Item = Term> + '_ {
        let k = self.order as i64;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &c)| Term { n: i as i64 - k, c })
    }

    /// Partial sum of order `n` at `t`; see [`partial_sum`].
    pub fn partial_sum(&self, n: usize, t: f64) -> Complex64 {
        partial_sum(self, n, t)
    }

    /// [`partial_sum`] as a plane point.
    pub fn partial_sum_point(&self, n: usize, t: f64) -> Point {
        to_point(partial_sum(self, n, t))
    }
}

impl serde::Serialize for Coefficients {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Record {
            n: i64,
            re: f64,
            im: f64,
        }

        serializer.collect_seq(self.iter().map(|t| Record {
            n: t.n,
            re: t.c.re,
            im: t.c.im,
        }))
    }
}

/// Compute `c_n = (1/N) Σ_k samples[k] · exp(-2πi·n·k/N)` for every `n ∈ [-K, K]`
/// on the calling thread.
pub fn compute_coefficients(
    samples: &[Complex64],
    order: i64,
) -> EpicycleResult<Coefficients> {
    compute_coefficients_with(samples, order, &Threading::default())
}

/// [`compute_coefficients`] with explicit threading.
///
/// Each `c_n` is summed sequentially in `k` order, so parallel and sequential runs produce
/// identical coefficients.
#[tracing::instrument(skip(samples), fields(samples = samples.len()))]
pub fn compute_coefficients_with(
    samples: &[Complex64],
    order: i64,
    threading: &Threading,
) -> EpicycleResult<Coefficients> {
    if order < 0 {
        return Err(EpicycleError::InvalidOrder(order));
    }
    if samples.is_empty() {
        return Err(EpicycleError::empty_input(
            "cannot compute coefficients of an empty sample sequence",
        ));
    }

    let order_usize = usize::try_from(order)
        .map_err(|_| EpicycleError::validation(format!("order {order} exceeds usize")))?;
    let count = order_usize
        .checked_mul(2)
        .and_then(|v| v.checked_add(1))
        .ok_or_else(|| EpicycleError::validation(format!("order {order} is too large")))?;

    let values = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            (0..count)
                .into_par_iter()
                .map(|i| coefficient(samples, i as i64 - order))
                .collect::<Vec<_>>()
        })
    } else {
        (0..count)
            .map(|i| coefficient(samples, i as i64 - order))
            .collect::<Vec<_>>()
    };

    tracing::debug!(order, coefficients = values.len(), "computed coefficients");
    Ok(Coefficients {
        order: order_usize,
        values,
    })
}

fn coefficient(samples: &[Complex64], n: i64) -> Complex64 {
    let len = samples.len() as i64;
    let sum: Complex64 = samples
        .iter()
        .enumerate()
        .map(|(k, z)| {
            // Reduce n·k mod N before scaling so large products keep full angle precision.
            let phase = (n * k as i64).rem_euclid(len) as f64 / len as f64;
            z * Complex64::from_polar(1.0, -TAU * phase)
        })
        .sum();
    sum / len as f64
}

/// `s(t) = Σ_{n=-N}^{N} c_n · exp(2πi·n·t)` over the keys present in `coeffs`.
///
/// `N` larger than the computed order sums every available key. `t` is reduced to its
/// fractional part, so `s(t) == s(t + 1)`.
pub fn partial_sum(coeffs: &Coefficients, n: usize, t: f64) -> Complex64 {
    let t = t.rem_euclid(1.0);
    let limit = n.min(coeffs.order) as i64;
    coeffs
        .iter()
        .filter(|term| term.n.abs() <= limit)
        .map(|term| term.at(t))
        .sum()
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/coeffs.rs"]
mod tests;
