//! Staged reveal of drawn numbers
//!
//! Presentation pacing only. A drawing is computed atomically by the
//! session engine; this module hands the already-final set to the UI as
//! a timed sequence. Nothing here sleeps or feeds back into game state.

use std::collections::BTreeSet;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Pacing profile for the number-by-number reveal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealTiming {
    /// Normal gameplay pacing
    #[default]
    Normal,
    /// Fast mode
    Turbo,
    /// No pauses (testing, batch runs)
    Instant,
}

impl RevealTiming {
    /// Delay between consecutive numbers, in milliseconds.
    pub fn interval_ms(self) -> u64 {
        match self {
            RevealTiming::Normal => 500,
            RevealTiming::Turbo => 150,
            RevealTiming::Instant => 0,
        }
    }
}

/// One reveal step: which number to show and when, relative to the start
/// of the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealStep {
    pub number: u8,
    pub at_ms: u64,
}

/// Shuffled, timestamped reveal order for one drawing.
///
/// Iterating yields [`RevealStep`]s with non-decreasing timestamps; the
/// consumer schedules them however it likes (timer, async task, or all
/// at once for `Instant` timing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealSequence {
    steps: Vec<RevealStep>,
}

impl RevealSequence {
    /// Build a reveal for `drawn`, in shuffled display order.
    pub fn new(drawn: &BTreeSet<u8>, rng: &mut impl Rng, timing: RevealTiming) -> Self {
        let mut order: Vec<u8> = drawn.iter().copied().collect();
        order.shuffle(rng);

        let interval = timing.interval_ms();
        let steps = order
            .into_iter()
            .enumerate()
            .map(|(i, number)| RevealStep {
                number,
                at_ms: i as u64 * interval,
            })
            .collect();

        Self { steps }
    }

    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total reveal duration in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.steps.last().map(|s| s.at_ms).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RevealStep> {
        self.steps.iter()
    }
}

impl IntoIterator for RevealSequence {
    type Item = RevealStep;
    type IntoIter = std::vec::IntoIter<RevealStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{NUMBERS_PER_DRAWING, UNIVERSE_SIZE, draw_numbers};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_reveal_covers_whole_drawing() {
        let mut rng = StdRng::seed_from_u64(21);
        let drawn = draw_numbers(&mut rng, NUMBERS_PER_DRAWING, UNIVERSE_SIZE);
        let reveal = RevealSequence::new(&drawn, &mut rng, RevealTiming::Normal);

        assert_eq!(reveal.len(), 20);
        let revealed: BTreeSet<u8> = reveal.iter().map(|s| s.number).collect();
        assert_eq!(revealed, drawn);
    }

    #[test]
    fn test_timestamps_are_monotonic() {
        let mut rng = StdRng::seed_from_u64(22);
        let drawn = draw_numbers(&mut rng, NUMBERS_PER_DRAWING, UNIVERSE_SIZE);
        let reveal = RevealSequence::new(&drawn, &mut rng, RevealTiming::Turbo);

        let mut last = 0;
        for step in reveal.iter() {
            assert!(step.at_ms >= last);
            last = step.at_ms;
        }
        assert_eq!(reveal.duration_ms(), 19 * 150);
    }

    #[test]
    fn test_instant_timing_has_no_delays() {
        let mut rng = StdRng::seed_from_u64(23);
        let drawn = draw_numbers(&mut rng, NUMBERS_PER_DRAWING, UNIVERSE_SIZE);
        let reveal = RevealSequence::new(&drawn, &mut rng, RevealTiming::Instant);

        assert!(reveal.iter().all(|s| s.at_ms == 0));
        assert_eq!(reveal.duration_ms(), 0);
    }

    #[test]
    fn test_empty_drawing_empty_reveal() {
        let mut rng = StdRng::seed_from_u64(24);
        let reveal = RevealSequence::new(&BTreeSet::new(), &mut rng, RevealTiming::Normal);
        assert!(reveal.is_empty());
        assert_eq!(reveal.duration_ms(), 0);
    }
}
