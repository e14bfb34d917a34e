//! Draw generator — uniform random subsets of the number universe

use std::collections::BTreeSet;

use rand::prelude::*;

/// Highest number on the bet card.
pub const UNIVERSE_SIZE: u8 = 80;

/// Numbers selected per drawing.
pub const NUMBERS_PER_DRAWING: usize = 20;

/// Draw `count` unique numbers uniformly from `1..=universe`.
///
/// Rejection sampling: duplicate samples are discarded until the set
/// reaches the target size. At the 20-of-80 fill ratio the expected
/// iteration count stays small.
///
/// # Panics
///
/// Panics if `count > universe`. That request can never be produced by
/// the documented call contract, so it is a programming error rather
/// than a runtime condition.
pub fn draw_numbers(rng: &mut impl Rng, count: usize, universe: u8) -> BTreeSet<u8> {
    assert!(
        count <= universe as usize,
        "cannot draw {count} unique numbers from a universe of {universe}"
    );

    let mut numbers = BTreeSet::new();
    while numbers.len() < count {
        numbers.insert(rng.random_range(1..=universe));
    }
    numbers
}
