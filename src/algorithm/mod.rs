//! # Algorithms
//!
//! Turning the tableaus reported by a solver into something that can be shown.
pub mod projection;
pub mod reconstruct;
