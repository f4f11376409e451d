//! FormVerse Engine - Repetition tracking and deviation scoring
//!
//! This crate implements the frame-synchronous core:
//! - Contraction events (angle snapshots at peak contraction)
//! - The two-state repetition tracker with hysteresis
//! - The deviation scorer against canonical contracted angles

pub mod event;
pub mod rep;
pub mod scorer;

pub use event::*;
pub use rep::*;
pub use scorer::*;
