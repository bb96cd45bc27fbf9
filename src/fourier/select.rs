use std::cmp::Ordering;

use crate::fourier::coeffs::{Coefficients, Term};

/// How [`select`] picks terms for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    /// Every term with `|n| <= M`.
    #[default]
    Order,
    /// The `M` largest terms by magnitude.
    Magnitude,
}

/// All terms by descending `|c_n|`; equal magnitudes keep ascending `n`.
pub fn ranked(coeffs: &Coefficients) -> Vec<Term> {
    let mut terms: Vec<Term> = coeffs.iter().collect();
    terms.sort_by(|a, b| rank_cmp(a, b));
    terms
}

fn rank_cmp(a: &Term, b: &Term) -> Ordering {
    b.magnitude()
        .total_cmp(&a.magnitude())
        .then_with(|| a.n.cmp(&b.n))
}

/// The `m` largest terms, in [`ranked`] order.
pub fn top_terms(coeffs: &Coefficients, m: usize) -> Vec<Term> {
    let mut terms = ranked(coeffs);
    terms.truncate(m);
    terms
}

/// Terms with `|n| <= m`, ascending `n`.
pub fn by_order(coeffs: &Coefficients, m: usize) -> Vec<Term> {
    let limit = m.min(coeffs.order()) as i64;
    coeffs.iter().filter(|t| t.n.abs() <= limit).collect()
}

/// Terms in chain order `0, 1, -1, 2, -2, …, m, -m`.
pub fn epicycle_order(coeffs: &Coefficients, m: usize) -> Vec<Term> {
    let limit = m.min(coeffs.order()) as i64;
    let mut out = Vec::with_capacity(2 * limit as usize + 1);
    let mut push = |n: i64| {
        if let Some(c) = coeffs.get(n) {
            out.push(Term { n, c });
        }
    };
    push(0);
    for k in 1..=limit {
        push(k);
        push(-k);
    }
    out
}

/// Pick display terms by `mode`.
pub fn select(coeffs: &Coefficients, m: usize, mode: SelectMode) -> Vec<Term> {
    match mode {
        SelectMode::Order => by_order(coeffs, m),
        SelectMode::Magnitude => top_terms(coeffs, m),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/select.rs"]
mod tests;
