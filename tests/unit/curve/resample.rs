use super::*;
use approx::assert_abs_diff_eq;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

#[test]
fn square_is_resampled_at_even_perimeter_steps() {
    let square = [c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 1.0)];
    let out = resample_by_arc_length(&square, 8).unwrap();
    let expected = [
        c(0.0, 0.0),
        c(0.5, 0.0),
        c(1.0, 0.0),
        c(1.0, 0.5),
        c(1.0, 1.0),
        c(0.5, 1.0),
        c(0.0, 1.0),
        c(0.0, 0.5),
    ];
    assert_eq!(out.len(), expected.len());
    for (got, want) in out.iter().zip(expected) {
        assert_abs_diff_eq!(got.re, want.re, epsilon = 1e-12);
        assert_abs_diff_eq!(got.im, want.im, epsilon = 1e-12);
    }
}

#[test]
fn uneven_input_density_becomes_even() {
    // Many points crowded on the first edge, one on each other edge.
    let mut pts: Vec<Complex64> = (0..50).map(|i| c(i as f64 / 50.0, 0.0)).collect();
    pts.extend([c(1.0, 0.0), c(1.0, 1.0), c(0.0, 1.0)]);
    let out = resample_by_arc_length(&pts, 4).unwrap();
    assert_abs_diff_eq!(out[1].re, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(out[2].im, 1.0, epsilon = 1e-12);
}

#[test]
fn zero_length_input_repeats_the_point() {
    let out = resample_by_arc_length(&[c(2.0, 3.0), c(2.0, 3.0)], 3).unwrap();
    assert_eq!(out, vec![c(2.0, 3.0); 3]);
}

#[test]
fn bad_arguments_are_rejected() {
    assert!(matches!(
        resample_by_arc_length(&[], 4),
        Err(EpicycleError::EmptyInput(_))
    ));
    assert!(matches!(
        resample_by_arc_length(&[c(0.0, 0.0), c(1.0, 0.0)], 0),
        Err(EpicycleError::Validation(_))
    ));
}
