use crate::error::{ScrollkitError, ScrollkitResult};

pub use kurbo::{Point, Rect, Vec2};

/// Discrete tick counter for fixed-interval effects (decode text).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TickIndex(pub u64);

/// A scroll-offset interval `[start, end]` in document pixels.
///
/// Progress over the range is 0 at `start` and 1 at `end`, clamped outside.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    /// Create a validated range with `start < end`.
    pub fn new(start: f64, end: f64) -> ScrollkitResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ScrollkitError::validation("ScrollRange must be finite"));
        }
        if start >= end {
            return Err(ScrollkitError::validation("ScrollRange start must be < end"));
        }
        Ok(Self { start, end })
    }

    pub fn len_px(self) -> f64 {
        self.end - self.start
    }

    pub fn contains(self, scroll_y: f64) -> bool {
        self.start <= scroll_y && scroll_y <= self.end
    }

    /// Normalized progress of `scroll_y` through the range, clamped to [0, 1].
    pub fn progress_at(self, scroll_y: f64) -> f64 {
        ((scroll_y - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

/// Per-tick scroll measurement for one trigger.
///
/// Superseded by each new sample; never stored historically.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSample {
    /// Progress through the trigger range in [0, 1].
    pub progress: f64,
    /// Smoothed scroll velocity across the trigger range, in document pixels
    /// per second. Signed.
    pub velocity: f64,
}

impl ScrollSample {
    pub fn rest() -> Self {
        Self {
            progress: 0.0,
            velocity: 0.0,
        }
    }
}

/// Host viewport dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> ScrollkitResult<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ScrollkitError::validation(
                "Viewport width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }
}

/// One first-order exponential smoothing step toward `target`.
///
/// `factor` is the fraction of the remaining distance covered per step.
/// This is the single smoothing primitive shared by every mapper.
pub fn approach(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor.clamp(0.0, 1.0)
}
