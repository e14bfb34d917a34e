//! Game configuration and the validated ticket boundary
//!
//! All player-supplied configuration is checked here, before it can reach
//! [`crate::session::KenoSession`]. The session itself only ever holds
//! values these types have already validated.

use std::collections::BTreeSet;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::draw::{UNIVERSE_SIZE, draw_numbers};
use crate::error::{KenoError, KenoResult};

/// Number of spots a player commits to for a session.
///
/// The payout schedule only defines these four games; any other count is
/// rejected at construction instead of silently paying zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SpotCount {
    One = 1,
    Four = 4,
    Eight = 8,
    Ten = 10,
}

impl SpotCount {
    /// All playable spot counts, lowest first.
    pub const ALL: [SpotCount; 4] = [
        SpotCount::One,
        SpotCount::Four,
        SpotCount::Eight,
        SpotCount::Ten,
    ];

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// How many numbers a valid selection must contain.
    #[inline]
    pub fn selection_size(self) -> usize {
        self as u8 as usize
    }
}

impl TryFrom<u8> for SpotCount {
    type Error = KenoError;

    fn try_from(value: u8) -> KenoResult<Self> {
        match value {
            1 => Ok(SpotCount::One),
            4 => Ok(SpotCount::Four),
            8 => Ok(SpotCount::Eight),
            10 => Ok(SpotCount::Ten),
            other => Err(KenoError::InvalidSpotCount(other)),
        }
    }
}

/// Number of drawings played against one selection (1-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingCount(u32);

impl DrawingCount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 4;

    pub fn new(count: u32) -> KenoResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(KenoError::InvalidDrawingCount(count))
        }
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

/// A validated bet: a spot count plus exactly that many unique numbers,
/// all on the 1-80 card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    spot_count: SpotCount,
    numbers: BTreeSet<u8>,
}

impl Ticket {
    /// Validate a player selection against its spot count.
    ///
    /// This is the single boundary where selection errors surface; the
    /// session engine never sees an invalid ticket.
    pub fn new(spot_count: SpotCount, numbers: BTreeSet<u8>) -> KenoResult<Self> {
        if let Some(&n) = numbers.iter().find(|&&n| n == 0 || n > UNIVERSE_SIZE) {
            return Err(KenoError::NumberOutOfRange(n));
        }
        if numbers.len() != spot_count.selection_size() {
            return Err(KenoError::SelectionSize {
                expected: spot_count.selection_size(),
                actual: numbers.len(),
            });
        }
        Ok(Self { spot_count, numbers })
    }

    /// Auto-pick: a uniformly random valid selection for `spot_count`.
    pub fn quick_pick(rng: &mut impl Rng, spot_count: SpotCount) -> Self {
        let numbers = draw_numbers(rng, spot_count.selection_size(), UNIVERSE_SIZE);
        Self { spot_count, numbers }
    }

    #[inline]
    pub fn spot_count(&self) -> SpotCount {
        self.spot_count
    }

    #[inline]
    pub fn numbers(&self) -> &BTreeSet<u8> {
        &self.numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn set(numbers: &[u8]) -> BTreeSet<u8> {
        numbers.iter().copied().collect()
    }

    #[test]
    fn test_spot_count_try_from() {
        assert_eq!(SpotCount::try_from(1), Ok(SpotCount::One));
        assert_eq!(SpotCount::try_from(4), Ok(SpotCount::Four));
        assert_eq!(SpotCount::try_from(8), Ok(SpotCount::Eight));
        assert_eq!(SpotCount::try_from(10), Ok(SpotCount::Ten));
    }

    #[test]
    fn test_spot_count_rejects_unplayable() {
        // 5 spots is not a game the schedule defines
        assert_eq!(SpotCount::try_from(5), Err(KenoError::InvalidSpotCount(5)));
        assert_eq!(SpotCount::try_from(0), Err(KenoError::InvalidSpotCount(0)));
        assert_eq!(
            SpotCount::try_from(80),
            Err(KenoError::InvalidSpotCount(80))
        );
    }

    #[test]
    fn test_drawing_count_range() {
        assert!(DrawingCount::new(1).is_ok());
        assert!(DrawingCount::new(4).is_ok());
        assert_eq!(
            DrawingCount::new(0),
            Err(KenoError::InvalidDrawingCount(0))
        );
        assert_eq!(
            DrawingCount::new(5),
            Err(KenoError::InvalidDrawingCount(5))
        );
    }

    #[test]
    fn test_ticket_accepts_exact_selection() {
        let ticket = Ticket::new(SpotCount::Four, set(&[7, 21, 42, 80])).unwrap();
        assert_eq!(ticket.spot_count(), SpotCount::Four);
        assert_eq!(ticket.numbers().len(), 4);
    }

    #[test]
    fn test_ticket_rejects_size_mismatch() {
        let err = Ticket::new(SpotCount::Four, set(&[1, 2, 3])).unwrap_err();
        assert_eq!(
            err,
            KenoError::SelectionSize {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_ticket_rejects_out_of_range() {
        let err = Ticket::new(SpotCount::One, set(&[81])).unwrap_err();
        assert_eq!(err, KenoError::NumberOutOfRange(81));

        let err = Ticket::new(SpotCount::One, set(&[0])).unwrap_err();
        assert_eq!(err, KenoError::NumberOutOfRange(0));
    }

    #[test]
    fn test_quick_pick_is_valid() {
        let mut rng = StdRng::seed_from_u64(9);
        for spot in SpotCount::ALL {
            let ticket = Ticket::quick_pick(&mut rng, spot);
            assert_eq!(ticket.numbers().len(), spot.selection_size());
            assert!(Ticket::new(spot, ticket.numbers().clone()).is_ok());
        }
    }
}
