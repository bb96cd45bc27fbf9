use std::f64::consts::TAU;

use crate::{
    foundation::core::{Point, Vec2},
    fourier::coeffs::Term,
};

/// Radius below which the original animation stopped drawing a circle.
pub const DEFAULT_MIN_RADIUS: f64 = 0.001;

/// One link of an epicycle chain at a fixed parameter value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Epicycle {
    /// Frequency index of the term.
    pub n: i64,
    /// Circle center (end of the previous link).
    pub center: Point,
    /// Circle radius, `|c_n|`.
    pub radius: f64,
    /// Arm angle in radians, `2π·n·t + arg(c_n)`.
    pub angle: f64,
}

impl Epicycle {
    /// Where this link's arm ends.
    pub fn tip(&self) -> Point {
        self.center + Vec2::from_angle(self.angle) * self.radius
    }
}

/// Chain `terms` end to end at parameter `t`, starting from the origin.
///
/// Terms with radius below `min_radius` are skipped; pass `0.0` to keep every term.
pub fn epicycle_chain<'a>(
    terms: impl IntoIterator<Item = &'a Term>,
    t: f64,
    min_radius: f64,
) -> Vec<Epicycle> {
    let t = t.rem_euclid(1.0);
    terms
        .into_iter()
        .filter(|term| term.magnitude() >= min_radius)
        .scan(Point::ORIGIN, |center, term| {
            let link = Epicycle {
                n: term.n,
                center: *center,
                radius: term.magnitude(),
                angle: TAU * term.n as f64 * t + term.phase(),
            };
            *center = link.tip();
            Some(link)
        })
        .collect()
}

/// End of the last link, or the origin for an empty chain.
pub fn chain_tip(chain: &[Epicycle]) -> Point {
    chain.last().map_or(Point::ORIGIN, Epicycle::tip)
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/epicycles.rs"]
mod tests;
