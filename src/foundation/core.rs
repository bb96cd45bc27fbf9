use crate::foundation::error::{EpicycleError, EpicycleResult};

pub use kurbo::{Affine, BezPath, PathSeg, Point, Vec2};
pub use num_complex::Complex64;

/// Map a plane point to the complex number `x + iy`.
pub fn to_complex(p: Point) -> Complex64 {
    Complex64::new(p.x, p.y)
}

/// Map a complex number back to the plane point `(re, im)`.
pub fn to_point(z: Complex64) -> Point {
    Point::new(z.re, z.im)
}

/// Animation frame position.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open range of frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame (inclusive).
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> EpicycleResult<Self> {
        if start.0 > end.0 {
            return Err(EpicycleError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when the range covers no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Iterate the frames in order.
    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

/// Map a frame to the curve parameter `t = frame / frames_per_cycle`, reduced to `[0, 1)`.
pub fn frame_to_t(frame: FrameIndex, frames_per_cycle: u64) -> EpicycleResult<f64> {
    if frames_per_cycle == 0 {
        return Err(EpicycleError::validation("frames_per_cycle must be > 0"));
    }
    let rem = frame.0 % frames_per_cycle;
    Ok(rem as f64 / frames_per_cycle as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
