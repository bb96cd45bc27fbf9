//! Curve sources and the sampler that turns them into normalized sample sequences.

pub(crate) mod presets;
pub(crate) mod resample;
pub(crate) mod sampler;
pub(crate) mod segment;
pub(crate) mod svg;
