use std::time::Duration;

use crate::foundation::error::{GlyphcastError, GlyphcastResult};

/// Absolute 0-based tick index within one pump run.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Tick rate represented as a rational `num/den` frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated rate with `num > 0` and `den > 0`.
    pub fn new(num: u32, den: u32) -> GlyphcastResult<Self> {
        if den == 0 {
            return Err(GlyphcastError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(GlyphcastError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point frames per second.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one tick in seconds (`1/fps`).
    pub fn tick_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Duration of one tick as a [`Duration`].
    pub fn tick_duration(self) -> Duration {
        Duration::from_secs_f64(self.tick_secs())
    }

    /// Number of whole ticks that fit into `secs` seconds (floor semantics).
    pub fn ticks_in_secs_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Text frame dimensions in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in columns.
    pub width: u32,
    /// Height in rows.
    pub height: u32,
}

impl Viewport {
    /// Create a validated viewport with both dimensions non-zero.
    pub fn new(width: u32, height: u32) -> GlyphcastResult<Self> {
        if width == 0 || height == 0 {
            return Err(GlyphcastError::validation(
                "Viewport dimensions must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Total number of character cells.
    pub fn cells(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
