//! Error types for the Keno engine

use thiserror::Error;

/// Engine error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KenoError {
    #[error("Invalid spot count: {0} (expected 1, 4, 8 or 10)")]
    InvalidSpotCount(u8),

    #[error("Invalid drawing count: {0} (expected 1-4)")]
    InvalidDrawingCount(u32),

    #[error("Selection size mismatch: expected {expected} numbers, got {actual}")]
    SelectionSize { expected: usize, actual: usize },

    #[error("Number out of range: {0} (bet card holds 1-80)")]
    NumberOutOfRange(u8),

    #[error("Spot count not set")]
    SpotCountNotSet,
}

/// Result type alias
pub type KenoResult<T> = Result<T, KenoError>;
