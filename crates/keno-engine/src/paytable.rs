//! Payout table — the fixed North Carolina Keno schedule

use serde::{Deserialize, Serialize};

use crate::config::SpotCount;

/// One schedule entry: match count → pay amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayEntry {
    pub matches: u8,
    pub amount: f64,
}

/// One game row: a spot count and its paying match counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRow {
    pub spot_count: SpotCount,
    pub entries: Vec<PayEntry>,
}

/// Complete payout table keyed by (spot count, match count).
///
/// Combinations not listed pay nothing. The 10-spot game pays for
/// matching zero numbers but not for matching 1-4; that anomaly comes
/// straight from the published lottery odds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayTable {
    rows: Vec<PayRow>,
}

impl PayTable {
    /// The North Carolina lottery schedule.
    pub fn nc_standard() -> Self {
        fn entry(matches: u8, amount: f64) -> PayEntry {
            PayEntry { matches, amount }
        }

        Self {
            rows: vec![
                PayRow {
                    spot_count: SpotCount::One,
                    entries: vec![entry(1, 2.0)],
                },
                PayRow {
                    spot_count: SpotCount::Four,
                    entries: vec![entry(2, 1.0), entry(3, 5.0), entry(4, 75.0)],
                },
                PayRow {
                    spot_count: SpotCount::Eight,
                    entries: vec![
                        entry(4, 2.0),
                        entry(5, 12.0),
                        entry(6, 50.0),
                        entry(7, 750.0),
                        entry(8, 10_000.0),
                    ],
                },
                PayRow {
                    spot_count: SpotCount::Ten,
                    entries: vec![
                        entry(0, 5.0),
                        entry(5, 2.0),
                        entry(6, 15.0),
                        entry(7, 100.0),
                        entry(8, 500.0),
                        entry(9, 5_000.0),
                        entry(10, 25_000.0),
                    ],
                },
            ],
        }
    }

    /// Look up the pay amount for `matches` under `spot_count`.
    pub fn payout(&self, spot_count: SpotCount, matches: usize) -> f64 {
        self.entries(spot_count)
            .iter()
            .find(|e| e.matches as usize == matches)
            .map(|e| e.amount)
            .unwrap_or(0.0)
    }

    /// Schedule entries for one game, for odds/rules display.
    pub fn entries(&self, spot_count: SpotCount) -> &[PayEntry] {
        self.rows
            .iter()
            .find(|row| row.spot_count == spot_count)
            .map(|row| row.entries.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for PayTable {
    fn default() -> Self {
        Self::nc_standard()
    }
}
