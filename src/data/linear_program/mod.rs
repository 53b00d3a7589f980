//! # Representing linear programs
//!
//! All input notations are normalized into the single representation in `canonical_form`, which
//! is also what is sent to a solver.
pub mod canonical_form;
pub mod elements;
