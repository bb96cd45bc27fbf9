//! Discrete Fourier coefficients, partial sums and the epicycle views built on them.

pub(crate) mod coeffs;
pub(crate) mod epicycles;
pub(crate) mod select;
pub(crate) mod trace;
