//! Smooth-scroll controller: eased, inertia-style scroll position updates.
//!
//! Explicitly constructed and injected rather than ambient global state; a
//! [`crate::Page`] owns exactly one instance for its whole lifetime.

use crate::error::{ScrollkitError, ScrollkitResult};

/// Distance below which the controller snaps to its target and settles.
const SNAP_EPSILON_PX: f64 = 0.1;

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct SmoothScrollOpts {
    /// Fraction of remaining distance covered per 60Hz-equivalent step,
    /// in (0, 1].
    pub lerp: f64,
    pub wheel_multiplier: f64,
    /// Maximum scrollable offset (document height minus viewport height).
    pub max_scroll: f64,
}

impl Default for SmoothScrollOpts {
    fn default() -> Self {
        Self {
            lerp: 0.1,
            wheel_multiplier: 1.0,
            max_scroll: 0.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SmoothScroll {
    opts: SmoothScrollOpts,
    target: f64,
    current: f64,
}

impl SmoothScroll {
    pub fn new(opts: SmoothScrollOpts) -> ScrollkitResult<Self> {
        if !(opts.lerp > 0.0 && opts.lerp <= 1.0) {
            return Err(ScrollkitError::validation(
                "smooth scroll lerp must be in (0, 1]",
            ));
        }
        if opts.max_scroll < 0.0 {
            return Err(ScrollkitError::validation("max_scroll must be >= 0"));
        }
        Ok(Self {
            opts,
            target: 0.0,
            current: 0.0,
        })
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.current).abs() < SNAP_EPSILON_PX
    }

    /// Resize the scrollable document; target and position re-clamp.
    pub fn set_max_scroll(&mut self, max_scroll: f64) -> ScrollkitResult<()> {
        if max_scroll < 0.0 {
            return Err(ScrollkitError::validation("max_scroll must be >= 0"));
        }
        self.opts.max_scroll = max_scroll;
        self.target = self.target.clamp(0.0, max_scroll);
        self.current = self.current.clamp(0.0, max_scroll);
        Ok(())
    }

    /// Accumulate a wheel delta into the eased target.
    pub fn on_wheel(&mut self, delta: f64) {
        self.target =
            (self.target + delta * self.opts.wheel_multiplier).clamp(0.0, self.opts.max_scroll);
    }

    /// Jump the target (nav pills, CTA buttons). The position still eases.
    pub fn scroll_to(&mut self, y: f64) {
        self.target = y.clamp(0.0, self.opts.max_scroll);
    }

    /// Advance by `dt` seconds and return the new scroll position.
    ///
    /// The exponential approach is normalized to 60Hz so the feel does not
    /// depend on the host's tick rate.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if dt > 0.0 {
            let steps = dt * 60.0;
            let factor = 1.0 - (1.0 - self.opts.lerp).powf(steps);
            self.current += (self.target - self.current) * factor;
            if self.is_settled() {
                self.current = self.target;
            }
        }
        self.current
    }
}
