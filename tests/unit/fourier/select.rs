use super::*;
use crate::{
    foundation::core::Complex64, fourier::coeffs::compute_coefficients,
};
use std::f64::consts::TAU;

fn three_tone(order: i64) -> Coefficients {
    let n = 16;
    let samples: Vec<Complex64> = (0..n)
        .map(|k| {
            let t = k as f64 / n as f64;
            Complex64::from_polar(1.0, TAU * t)
                + Complex64::from_polar(0.5, -2.0 * TAU * t)
                + Complex64::from_polar(0.25, 3.0 * TAU * t)
        })
        .collect();
    compute_coefficients(&samples, order).unwrap()
}

fn ns(terms: &[Term]) -> Vec<i64> {
    terms.iter().map(|t| t.n).collect()
}

#[test]
fn ranked_orders_by_descending_magnitude() {
    let coeffs = three_tone(5);
    let ranked = ranked(&coeffs);
    assert_eq!(ranked.len(), coeffs.len());
    assert_eq!(ns(&ranked[..3]), vec![1, -2, 3]);
    assert!(
        ranked
            .windows(2)
            .all(|w| w[0].magnitude() >= w[1].magnitude())
    );
}

#[test]
fn ranked_breaks_ties_by_ascending_index() {
    // A single sample makes every coefficient identical.
    let coeffs = compute_coefficients(&[Complex64::new(0.3, -0.4)], 3).unwrap();
    assert_eq!(ns(&ranked(&coeffs)), vec![-3, -2, -1, 0, 1, 2, 3]);
}

#[test]
fn top_terms_truncates_ranking() {
    let coeffs = three_tone(5);
    assert_eq!(ns(&top_terms(&coeffs, 2)), vec![1, -2]);
    assert_eq!(top_terms(&coeffs, 100).len(), coeffs.len());
    assert!(top_terms(&coeffs, 0).is_empty());
}

#[test]
fn by_order_keeps_ascending_window() {
    let coeffs = three_tone(5);
    assert_eq!(ns(&by_order(&coeffs, 2)), vec![-2, -1, 0, 1, 2]);
    assert_eq!(by_order(&coeffs, 9).len(), 11);
}

#[test]
fn epicycle_order_alternates_signs() {
    let coeffs = three_tone(5);
    assert_eq!(ns(&epicycle_order(&coeffs, 2)), vec![0, 1, -1, 2, -2]);
    assert_eq!(ns(&epicycle_order(&coeffs, 0)), vec![0]);
    assert_eq!(epicycle_order(&coeffs, 40).len(), 11);
}

#[test]
fn select_dispatches_on_mode() {
    let coeffs = three_tone(5);
    assert_eq!(select(&coeffs, 1, SelectMode::Order), by_order(&coeffs, 1));
    assert_eq!(
        select(&coeffs, 1, SelectMode::Magnitude),
        top_terms(&coeffs, 1)
    );
}
