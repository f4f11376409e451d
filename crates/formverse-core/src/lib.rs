//! FormVerse Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout FormVerse:
//! - Joint identifiers with their pose-model landmark indices
//! - Landmarks and per-frame landmark sets
//! - The 3D joint-angle kernel
//! - Error taxonomy

pub mod error;
pub mod geometry;
pub mod joint;
pub mod landmark;

pub use error::*;
pub use geometry::*;
pub use joint::*;
pub use landmark::*;
