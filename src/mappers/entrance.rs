//! One-shot staggered entrance animations.
//!
//! An entrance arms once, fires once, and never re-arms: scrolling a section
//! back into view must not replay its intro.

use crate::{core::Vec2, ease::Ease};

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct EntranceSpec {
    /// Initial offset the elements animate in from.
    pub from_offset: Vec2,
    pub from_opacity: f64,
    pub from_scale: f64,
    pub duration_secs: f64,
    /// Per-element delay step.
    pub stagger_secs: f64,
    /// Extra delay before the first element starts.
    pub base_delay_secs: f64,
    pub ease: Ease,
}

impl EntranceSpec {
    /// Rise from below: section copy and project cards.
    pub fn rise(from_y: f64, stagger_secs: f64) -> Self {
        Self {
            from_offset: Vec2::new(0.0, from_y),
            from_opacity: 0.0,
            from_scale: 1.0,
            duration_secs: 0.8,
            stagger_secs,
            base_delay_secs: 0.0,
            ease: Ease::OutCubic,
        }
    }

    /// Slide in from the left: the showcase item list.
    pub fn slide_left() -> Self {
        Self {
            from_offset: Vec2::new(-30.0, 0.0),
            from_opacity: 0.0,
            from_scale: 1.0,
            duration_secs: 0.6,
            stagger_secs: 0.1,
            base_delay_secs: 0.5,
            ease: Ease::OutCubic,
        }
    }

    /// Pop with overshoot: the stats counters.
    pub fn pop() -> Self {
        Self {
            from_offset: Vec2::new(0.0, 30.0),
            from_opacity: 0.0,
            from_scale: 0.9,
            duration_secs: 0.6,
            stagger_secs: 0.1,
            base_delay_secs: 0.0,
            ease: Ease::OutBack,
        }
    }
}

/// Playback instruction for one entering element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EntranceCue {
    pub index: usize,
    pub delay_secs: f64,
    pub from_offset: Vec2,
    pub from_opacity: f64,
    pub from_scale: f64,
    pub duration_secs: f64,
    pub ease: Ease,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntranceState {
    Armed,
    Fired,
}

#[derive(Clone, Debug)]
pub struct Entrance {
    spec: EntranceSpec,
    state: EntranceState,
}

impl Entrance {
    pub fn new(spec: EntranceSpec) -> Self {
        Self {
            spec,
            state: EntranceState::Armed,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.state == EntranceState::Fired
    }

    /// Produce the staggered cues for `count` elements, exactly once.
    ///
    /// Returns `None` on every call after the first; firing is irreversible.
    pub fn fire(&mut self, count: usize) -> Option<Vec<EntranceCue>> {
        if self.state == EntranceState::Fired {
            return None;
        }
        self.state = EntranceState::Fired;
        let spec = self.spec;
        Some(
            (0..count)
                .map(|index| EntranceCue {
                    index,
                    delay_secs: spec.base_delay_secs + index as f64 * spec.stagger_secs,
                    from_offset: spec.from_offset,
                    from_opacity: spec.from_opacity,
                    from_scale: spec.from_scale,
                    duration_secs: spec.duration_secs,
                    ease: spec.ease,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once() {
        let mut e = Entrance::new(EntranceSpec::rise(60.0, 0.15));
        assert!(!e.has_fired());

        let cues = e.fire(3).unwrap();
        assert_eq!(cues.len(), 3);
        assert!(e.has_fired());

        // Simulated re-entry: must not replay.
        assert!(e.fire(3).is_none());
        assert!(e.fire(99).is_none());
    }

    #[test]
    fn stagger_delays_are_sequential() {
        let mut e = Entrance::new(EntranceSpec::rise(50.0, 0.15));
        let cues = e.fire(4).unwrap();
        for (i, cue) in cues.iter().enumerate() {
            assert_eq!(cue.index, i);
            assert!((cue.delay_secs - i as f64 * 0.15).abs() < 1e-12);
        }
    }

    #[test]
    fn base_delay_shifts_the_whole_batch() {
        let mut e = Entrance::new(EntranceSpec::slide_left());
        let cues = e.fire(2).unwrap();
        assert!((cues[0].delay_secs - 0.5).abs() < 1e-12);
        assert!((cues[1].delay_secs - 0.6).abs() < 1e-12);
    }

    #[test]
    fn firing_zero_elements_still_disarms() {
        let mut e = Entrance::new(EntranceSpec::pop());
        assert_eq!(e.fire(0).unwrap().len(), 0);
        assert!(e.fire(5).is_none());
    }
}
