//! Decode-text effect: scramble toward the target string at a fixed tick rate.

use crate::{
    core::TickIndex,
    error::{ScrollkitError, ScrollkitResult},
};

/// Interval between decode ticks, matching the original 40ms cadence.
pub const TICK_INTERVAL_SECS: f64 = 0.040;

/// Ticks spent scrambling per revealed character.
pub const DEFAULT_REVEAL_RATE: u32 = 8;

const DEFAULT_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DecodePhase {
    Scrambling,
    Revealed,
}

/// `Scrambling -> Revealed` state machine.
///
/// Character `i` shows its true value once `tick / rate >= i`; everything
/// past the reveal index is drawn deterministically from the alphabet, so two
/// machines with the same seed replay the same scramble.
#[derive(Clone, Debug)]
pub struct DecodeText {
    target: Vec<char>,
    alphabet: Vec<char>,
    rate: u32,
    seed: u64,
    tick: TickIndex,
    phase: DecodePhase,
}

impl DecodeText {
    pub fn new(target: &str, alphabet: &str, rate: u32, seed: u64) -> ScrollkitResult<Self> {
        if rate == 0 {
            return Err(ScrollkitError::validation("decode rate must be > 0"));
        }
        let alphabet = if alphabet.is_empty() {
            DEFAULT_ALPHABET
        } else {
            alphabet
        };
        let target: Vec<char> = target.chars().collect();
        let phase = if target.is_empty() {
            DecodePhase::Revealed // empty target: the effect is a no-op
        } else {
            DecodePhase::Scrambling
        };
        Ok(Self {
            target,
            alphabet: alphabet.chars().collect(),
            rate,
            seed,
            tick: TickIndex(0),
            phase,
        })
    }

    pub fn phase(&self) -> DecodePhase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == DecodePhase::Revealed
    }

    /// True when there is nothing to decode and the owning view should render
    /// nothing at all.
    pub fn is_noop(&self) -> bool {
        self.target.is_empty()
    }

    /// Advance one tick. A no-op once revealed.
    pub fn advance(&mut self) {
        if self.phase == DecodePhase::Revealed {
            return;
        }
        self.tick = TickIndex(self.tick.0 + 1);
        if self.tick.0 >= self.target.len() as u64 * u64::from(self.rate) {
            self.phase = DecodePhase::Revealed;
        }
    }

    /// Text to display for the current tick.
    pub fn display(&self) -> String {
        if self.phase == DecodePhase::Revealed {
            return self.target.iter().collect();
        }
        self.target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if self.revealed_at(i) {
                    c
                } else {
                    self.scramble_char(i)
                }
            })
            .collect()
    }

    fn revealed_at(&self, index: usize) -> bool {
        index as u64 * u64::from(self.rate) <= self.tick.0
    }

    fn scramble_char(&self, index: usize) -> char {
        let h = scramble_hash(self.seed, self.tick.0, index as u64);
        self.alphabet[(h % self.alphabet.len() as u64) as usize]
    }
}

/// Seeded FNV-1a 64 over (tick, index), giving a stable scramble per seed.
fn scramble_hash(seed: u64, tick: u64, index: u64) -> u64 {
    let mut h = 0xcbf2_9ce4_8422_2325u64 ^ seed;
    for b in tick.to_le_bytes().iter().chain(index.to_le_bytes().iter()) {
        h ^= u64::from(*b);
        h = h.wrapping_mul(0x0000_0100_0000_01B3);
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_fully_at_len_times_rate() {
        let target = "NEBULA";
        let rate = 8;
        let mut d = DecodeText::new(target, "", rate, 7).unwrap();

        for _ in 0..(target.len() as u32 * rate) {
            assert!(!d.is_revealed());
            d.advance();
        }
        assert!(d.is_revealed());
        assert_eq!(d.display(), target);

        // Stays revealed forever after.
        for _ in 0..100 {
            d.advance();
            assert_eq!(d.display(), target);
        }
    }

    #[test]
    fn prefix_reveals_in_order() {
        let target = "ABCD";
        let rate = 4;
        let mut d = DecodeText::new(target, "xyz", rate, 1).unwrap();

        for _ in 0..9 {
            d.advance();
        }
        // tick = 9, rate = 4: positions 0,1,2 revealed (i*4 <= 9), 3 not.
        let s: Vec<char> = d.display().chars().collect();
        assert_eq!(&s[..3], &['A', 'B', 'C']);
        assert!("xyz".contains(s[3]));
    }

    #[test]
    fn scramble_is_deterministic_per_seed() {
        let mut a = DecodeText::new("HELLO", "", 8, 42).unwrap();
        let mut b = DecodeText::new("HELLO", "", 8, 42).unwrap();
        for _ in 0..10 {
            a.advance();
            b.advance();
            assert_eq!(a.display(), b.display());
        }
    }

    #[test]
    fn empty_target_is_a_noop() {
        let mut d = DecodeText::new("", "", 8, 0).unwrap();
        assert!(d.is_noop());
        assert!(d.is_revealed());
        d.advance();
        assert_eq!(d.display(), "");
    }

    #[test]
    fn zero_rate_is_rejected() {
        assert!(DecodeText::new("X", "", 0, 0).is_err());
    }
}
