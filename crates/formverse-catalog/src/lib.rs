//! FormVerse Catalog - Static exercise reference data
//!
//! This crate holds the immutable lookup tables the engine runs on:
//! - Per-joint angle specs (which landmark triple defines each angle)
//! - The built-in exercise catalog (canonical angles, rep thresholds)
//! - One-time validation that every entry references known joints

pub mod exercise;
pub mod spec;

pub use exercise::*;
pub use spec::*;
