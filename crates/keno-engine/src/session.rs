//! Keno session engine — core game state and session lifecycle

use std::collections::BTreeSet;

use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::{DrawingCount, SpotCount, Ticket};
use crate::draw::{NUMBERS_PER_DRAWING, UNIVERSE_SIZE, draw_numbers};
use crate::error::{KenoError, KenoResult};
use crate::paytable::PayTable;
use crate::reveal::{RevealSequence, RevealTiming};

/// Keno session engine
///
/// Owns all mutable game state: the configured spot count, the player
/// selection, the most recent drawing, per-session counters and winnings.
/// Single-writer by design — presentation layers mutate it through the
/// operations here and read it through the query methods only.
pub struct KenoSession {
    /// Payout schedule
    paytable: PayTable,
    /// Random number generator
    rng: StdRng,
    /// Configured spot count, if any
    spot_count: Option<SpotCount>,
    /// Player selection
    selection: BTreeSet<u8>,
    /// Most recent drawing
    drawn: BTreeSet<u8>,
    /// Completed drawings in the current session (0-based counter)
    current_drawing: u32,
    /// Drawings requested for the current session
    total_drawings: u32,
    /// Cumulative winnings, across sessions until a full reset
    total_winnings: f64,
    /// Winnings from the most recent settled drawing
    last_drawing_winnings: f64,
    /// Lifetime statistics
    stats: SessionStats,
}

/// Lifetime session statistics
///
/// Survives `start_session`; cleared only by a full `reset`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub drawings: u64,
    pub wins: u64,
    pub losses: u64,
    pub numbers_matched: u64,
    pub total_won: f64,
    pub best_win: f64,
}

impl SessionStats {
    /// Share of settled drawings that paid anything
    pub fn hit_rate(&self) -> f64 {
        if self.drawings > 0 {
            (self.wins as f64 / self.drawings as f64) * 100.0
        } else {
            0.0
        }
    }
}

impl KenoSession {
    /// Create a fresh engine with the standard schedule.
    pub fn new() -> Self {
        Self::with_paytable(PayTable::nc_standard())
    }

    /// Create with a specific payout schedule.
    pub fn with_paytable(paytable: PayTable) -> Self {
        Self {
            paytable,
            rng: StdRng::from_os_rng(),
            spot_count: None,
            selection: BTreeSet::new(),
            drawn: BTreeSet::new(),
            current_drawing: 0,
            total_drawings: 0,
            total_winnings: 0.0,
            last_drawing_winnings: 0.0,
            stats: SessionStats::default(),
        }
    }

    /// Seed the RNG for reproducible sessions.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SESSION LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Return to the empty state, discarding everything including
    /// cumulative winnings and statistics. Valid from any state.
    pub fn reset(&mut self) {
        self.spot_count = None;
        self.selection.clear();
        self.drawn.clear();
        self.current_drawing = 0;
        self.total_drawings = 0;
        self.total_winnings = 0.0;
        self.last_drawing_winnings = 0.0;
        self.stats = SessionStats::default();
    }

    /// Record the spot count for the next ticket.
    pub fn set_spot_count(&mut self, spot_count: SpotCount) {
        self.spot_count = Some(spot_count);
    }

    /// Replace the spot count and selection with a validated ticket.
    ///
    /// Call after `start_session`, which clears any previous selection.
    pub fn place_ticket(&mut self, ticket: Ticket) {
        self.spot_count = Some(ticket.spot_count());
        self.selection = ticket.numbers().clone();
    }

    /// Auto-pick a selection for the configured spot count.
    pub fn quick_pick(&mut self) -> KenoResult<&BTreeSet<u8>> {
        let spot_count = self.spot_count.ok_or(KenoError::SpotCountNotSet)?;
        let ticket = Ticket::quick_pick(&mut self.rng, spot_count);
        self.selection = ticket.numbers().clone();
        Ok(&self.selection)
    }

    /// Begin a session of `drawings` drawings: zero the drawing counter
    /// and per-drawing winnings, clear the selection and the last drawn
    /// set. Cumulative winnings persist until a full [`reset`](Self::reset).
    pub fn start_session(&mut self, drawings: DrawingCount) {
        self.total_drawings = drawings.get();
        self.current_drawing = 0;
        self.last_drawing_winnings = 0.0;
        self.selection.clear();
        self.drawn.clear();
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // DRAWING AND SETTLEMENT
    // ═══════════════════════════════════════════════════════════════════════════

    /// Run one drawing: 20 fresh numbers of 1-80 replace the stored set
    /// and the drawing counter advances.
    ///
    /// The engine imposes no precondition here — gating on a complete
    /// selection or remaining drawings is the caller's job.
    pub fn run_drawing(&mut self) -> &BTreeSet<u8> {
        self.drawn = draw_numbers(&mut self.rng, NUMBERS_PER_DRAWING, UNIVERSE_SIZE);
        self.current_drawing += 1;
        log::debug!(
            "drawing {}/{}: {:?}",
            self.current_drawing,
            self.total_drawings,
            self.drawn
        );
        &self.drawn
    }

    /// Numbers present in both the selection and the current drawing.
    /// Pure; empty if either side is empty.
    pub fn matches(&self) -> BTreeSet<u8> {
        self.selection.intersection(&self.drawn).copied().collect()
    }

    /// Settle the current drawing for `match_count` matched numbers.
    ///
    /// Looks up the schedule for the configured spot count, records the
    /// amount as the per-drawing winnings (even when zero) and adds it to
    /// the cumulative total. Returns the amount. With no spot count
    /// configured the drawing pays nothing.
    pub fn calculate_winnings(&mut self, match_count: usize) -> f64 {
        let amount = self
            .spot_count
            .map(|spot| self.paytable.payout(spot, match_count))
            .unwrap_or(0.0);

        self.last_drawing_winnings = amount;
        self.total_winnings += amount;

        self.stats.drawings += 1;
        self.stats.numbers_matched += match_count as u64;
        self.stats.total_won += amount;
        if amount > 0.0 {
            self.stats.wins += 1;
        } else {
            self.stats.losses += 1;
        }
        if amount > self.stats.best_win {
            self.stats.best_win = amount;
        }

        log::debug!("settled drawing: {match_count} matches pay {amount}");
        amount
    }

    /// Timed, shuffled reveal order for the current drawing.
    pub fn reveal_sequence(&mut self, timing: RevealTiming) -> RevealSequence {
        let drawn = self.drawn.clone();
        RevealSequence::new(&drawn, &mut self.rng, timing)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // QUERIES
    // ═══════════════════════════════════════════════════════════════════════════

    /// True while the session has drawings left to run.
    pub fn has_more_drawings(&self) -> bool {
        self.current_drawing < self.total_drawings
    }

    pub fn spot_count(&self) -> Option<SpotCount> {
        self.spot_count
    }

    pub fn selection(&self) -> &BTreeSet<u8> {
        &self.selection
    }

    pub fn drawn_numbers(&self) -> &BTreeSet<u8> {
        &self.drawn
    }

    pub fn current_drawing(&self) -> u32 {
        self.current_drawing
    }

    pub fn total_drawings(&self) -> u32 {
        self.total_drawings
    }

    pub fn total_winnings(&self) -> f64 {
        self.total_winnings
    }

    pub fn last_drawing_winnings(&self) -> f64 {
        self.last_drawing_winnings
    }

    pub fn paytable(&self) -> &PayTable {
        &self.paytable
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Export lifetime statistics as JSON.
    pub fn export_stats(&self) -> String {
        serde_json::to_string_pretty(&self.stats).unwrap_or_default()
    }
}

impl Default for KenoSession {
    fn default() -> Self {
        Self::new()
    }
}
