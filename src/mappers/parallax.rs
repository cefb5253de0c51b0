//! Parallax strip mapper: two rows sliding in opposite directions, rigidly
//! coupled to scroll (scrubbed, so no smoothing of its own).

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ParallaxStyle {
    /// Pixels the top row travels left over the full range.
    pub top_magnitude: f64,
    /// Pixels the bottom row travels right over the full range.
    pub bottom_magnitude: f64,
    /// Constant pre-offset so the rows sit staggered at rest.
    pub bottom_bias: f64,
}

impl Default for ParallaxStyle {
    fn default() -> Self {
        Self {
            top_magnitude: 300.0,
            bottom_magnitude: 300.0,
            bottom_bias: 150.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParallaxOffsets {
    pub top_x: f64,
    pub bottom_x: f64,
}

/// Linear map from progress to the two row offsets.
pub fn offsets(style: ParallaxStyle, progress: f64) -> ParallaxOffsets {
    let p = progress.clamp(0.0, 1.0);
    ParallaxOffsets {
        top_x: -style.top_magnitude * p,
        bottom_x: style.bottom_magnitude * p - style.bottom_bias,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_state_keeps_bottom_bias() {
        let o = offsets(ParallaxStyle::default(), 0.0);
        assert_eq!(o.top_x, 0.0);
        assert_eq!(o.bottom_x, -150.0);
    }

    #[test]
    fn rows_move_in_opposite_directions() {
        let style = ParallaxStyle::default();
        for p in [0.25, 0.5, 0.75, 1.0] {
            let o = offsets(style, p);
            assert_eq!(o.top_x, -300.0 * p);
            assert_eq!(o.bottom_x, 300.0 * p - 150.0);
        }
        let a = offsets(style, 0.2);
        let b = offsets(style, 0.8);
        assert!(b.top_x < a.top_x);
        assert!(b.bottom_x > a.bottom_x);
    }

    #[test]
    fn progress_is_clamped() {
        let style = ParallaxStyle::default();
        assert_eq!(offsets(style, -1.0), offsets(style, 0.0));
        assert_eq!(offsets(style, 2.0), offsets(style, 1.0));
    }
}
