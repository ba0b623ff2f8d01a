//! Shared primitives used across the windowing modules.

pub mod errors;
pub mod geometry;
pub mod ids;
