//! Showcase cube mapper: scroll progress to rotation, plus velocity-driven
//! blur/letter-spacing cosmetics and the discrete active-item index.

use std::f64::consts::{PI, TAU};

use crate::{
    core::{approach, ScrollSample},
    error::{ScrollkitError, ScrollkitResult},
};

/// Tunable cosmetic constants. The divisors and smoothing factors are
/// empirical, not contracts.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct CubeStyle {
    /// Peak X tilt in radians at mid-scroll.
    pub amplitude: f64,
    /// Rotation smoothing factor per tick.
    pub smoothing: f64,
    /// px/s of scroll velocity per pixel of motion blur.
    pub blur_divisor: f64,
    pub blur_cap_px: f64,
    /// px/s of scroll velocity per pixel of letter spacing.
    pub spacing_divisor: f64,
    pub spacing_cap_px: f64,
    /// Smoothing factor for the velocity-driven cosmetics.
    pub velocity_smoothing: f64,
}

impl Default for CubeStyle {
    fn default() -> Self {
        Self {
            amplitude: 0.3,
            smoothing: 0.1,
            blur_divisor: 500.0,
            blur_cap_px: 8.0,
            spacing_divisor: 100.0,
            spacing_cap_px: 30.0,
            velocity_smoothing: 0.2,
        }
    }
}

/// Presentation parameters for one tick of the showcase cube.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CubeParams {
    pub rotation_y: f64,
    pub rotation_x: f64,
    pub blur_px: f64,
    pub letter_spacing_px: f64,
    /// Which of the N showcased items is highlighted.
    pub active_index: usize,
}

/// Pre-smoothing rotation targets. Exact, pure functions of progress.
pub fn target_rotation_y(progress: f64) -> f64 {
    progress * TAU
}

pub fn target_rotation_x(progress: f64, amplitude: f64) -> f64 {
    (progress * PI).sin() * amplitude
}

/// Discrete item selection: floor ties resolve toward the lower index, and
/// the final item stays selected for progress in [(n-1)/n, 1].
pub fn active_index(progress: f64, n: usize) -> usize {
    debug_assert!(n > 0);
    ((progress.clamp(0.0, 1.0) * n as f64).floor() as usize).min(n - 1)
}

/// Stateful mapper holding the exponentially smoothed display values.
#[derive(Clone, Debug)]
pub struct CubeMapper {
    style: CubeStyle,
    items: usize,
    rotation_y: f64,
    rotation_x: f64,
    blur_px: f64,
    letter_spacing_px: f64,
}

impl CubeMapper {
    pub fn new(items: usize, style: CubeStyle) -> ScrollkitResult<Self> {
        if items == 0 {
            return Err(ScrollkitError::validation(
                "cube mapper needs at least one item",
            ));
        }
        Ok(Self {
            style,
            items,
            rotation_y: 0.0,
            rotation_x: 0.0,
            blur_px: 0.0,
            letter_spacing_px: 0.0,
        })
    }

    pub fn update(&mut self, sample: ScrollSample) -> CubeParams {
        let s = &self.style;

        self.rotation_y = approach(
            self.rotation_y,
            target_rotation_y(sample.progress),
            s.smoothing,
        );
        self.rotation_x = approach(
            self.rotation_x,
            target_rotation_x(sample.progress, s.amplitude),
            s.smoothing,
        );

        let speed = sample.velocity.abs();
        let target_blur = (speed / s.blur_divisor).min(s.blur_cap_px);
        let target_spacing = (speed / s.spacing_divisor).min(s.spacing_cap_px);
        self.blur_px = approach(self.blur_px, target_blur, s.velocity_smoothing);
        self.letter_spacing_px = approach(
            self.letter_spacing_px,
            target_spacing,
            s.velocity_smoothing,
        );

        CubeParams {
            rotation_y: self.rotation_y,
            rotation_x: self.rotation_x,
            blur_px: self.blur_px,
            letter_spacing_px: self.letter_spacing_px,
            active_index: active_index(sample.progress, self.items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_targets_are_exact() {
        for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(target_rotation_y(p), p * TAU);
            assert!((target_rotation_x(p, 0.3) - (p * PI).sin() * 0.3).abs() < 1e-15);
        }
        assert_eq!(target_rotation_y(1.0), TAU);
        assert!(target_rotation_x(1.0, 0.3).abs() < 1e-15);
    }

    #[test]
    fn active_index_boundaries() {
        let n = 4;
        assert_eq!(active_index(0.0, n), 0);
        assert_eq!(active_index(1.0, n), n - 1);
        for k in 0..n {
            // p = k/n lands exactly on index k, not k-1.
            assert_eq!(active_index(k as f64 / n as f64, n), k);
        }
        assert_eq!(active_index(0.999, n), n - 1);
    }

    #[test]
    fn smoothing_approaches_target_without_overshoot() {
        let mut m = CubeMapper::new(4, CubeStyle::default()).unwrap();
        let sample = ScrollSample {
            progress: 1.0,
            velocity: 0.0,
        };

        let mut last = 0.0;
        for _ in 0..400 {
            let p = m.update(sample);
            assert!(p.rotation_y >= last);
            assert!(p.rotation_y <= TAU + 1e-12);
            last = p.rotation_y;
        }
        assert!((last - TAU).abs() < 1e-6);
    }

    #[test]
    fn velocity_cosmetics_are_capped() {
        let style = CubeStyle::default();
        let mut m = CubeMapper::new(4, style).unwrap();
        let sample = ScrollSample {
            progress: 0.5,
            velocity: 1e9,
        };
        for _ in 0..400 {
            let p = m.update(sample);
            assert!(p.blur_px <= style.blur_cap_px + 1e-12);
            assert!(p.letter_spacing_px <= style.spacing_cap_px + 1e-12);
        }
        let p = m.update(sample);
        assert!((p.blur_px - style.blur_cap_px).abs() < 1e-6);
    }

    #[test]
    fn zero_items_is_rejected() {
        assert!(CubeMapper::new(0, CubeStyle::default()).is_err());
    }
}
