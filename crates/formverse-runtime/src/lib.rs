//! FormVerse Runtime - Coaching session loop
//!
//! Frame-synchronous session driving the repetition engine, with
//! fire-and-forget narration dispatch so slow external feedback calls
//! overlap across reps without blocking frame processing.

pub mod narrator;
pub mod session;

pub use narrator::*;
pub use session::*;
