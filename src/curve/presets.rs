use std::f64::consts::TAU;

use crate::{
    curve::sampler::{CurveSource, ParamDomain, ParametricCurve},
    foundation::core::Point,
};

/// Built-in closed-form curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Classic heart curve `x = 16 sin³t`, `y = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t`.
    Heart,
    /// Five-petal rose `r = 0.6 + 0.4 cos 5t`.
    Flower,
    /// Two-turn spiral with linearly growing radius (open, so the series closes it).
    Spiral,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Preset; 3] = [Preset::Heart, Preset::Flower, Preset::Spiral];

    /// Lower-case name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Flower => "flower",
            Self::Spiral => "spiral",
        }
    }

    /// The preset as a parametric curve.
    pub fn curve(self) -> ParametricCurve {
        match self {
            Self::Heart => ParametricCurve::new(ParamDomain::Angle, heart),
            Self::Flower => ParametricCurve::new(ParamDomain::Angle, flower),
            Self::Spiral => ParametricCurve::new(ParamDomain::Unit, spiral),
        }
    }

    /// The preset as a sampling source.
    pub fn source(self) -> CurveSource {
        CurveSource::Parametric(self.curve())
    }
}

impl std::str::FromStr for Preset {
    type Err = crate::EpicycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::EpicycleError::validation(format!("unknown preset '{s}'")))
    }
}

/// Heart curve at angle `t`, scaled by 1/20 to sit near the unit disk.
pub fn heart(t: f64) -> Point {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    Point::new(x / 20.0, y / 20.0)
}

/// Rose curve at angle `t`.
pub fn flower(t: f64) -> Point {
    let r = 0.6 + 0.4 * (5.0 * t).cos();
    Point::new(r * t.cos(), r * t.sin())
}

/// Spiral at `t ∈ [0, 1)`: two full turns, radius from 0.05 to 0.95.
pub fn spiral(t: f64) -> Point {
    let angle = 2.0 * TAU * t;
    let r = 0.05 + 0.9 * t;
    Point::new(r * angle.cos(), r * angle.sin())
}

#[cfg(test)]
#[path = "../../tests/unit/curve/presets.rs"]
mod tests;
