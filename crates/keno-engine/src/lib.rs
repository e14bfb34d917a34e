//! # keno-engine — Keno lottery session engine
//!
//! Deterministic core for a single-player Keno simulator: draw generation,
//! match detection, payout lookup and multi-drawing session tracking.
//! Presentation layers (GUI or CLI) consume it through [`KenoSession`];
//! nothing in this crate renders, blocks, or touches the filesystem.
//!
//! ## Architecture
//!
//! ```text
//! KenoSession
//!     │
//!     ├── SpotCount / DrawingCount / Ticket (validated configuration)
//!     ├── PayTable (fixed North Carolina schedule)
//!     └── draw_numbers (20 unique of 1..=80)
//!           │
//!           v
//!     matches → winnings → RevealSequence
//! ```

pub mod config;
pub mod draw;
pub mod error;
pub mod paytable;
pub mod reveal;
pub mod session;

pub use config::*;
pub use draw::*;
pub use error::*;
pub use paytable::*;
pub use reveal::*;
pub use session::*;
