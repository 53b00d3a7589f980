//! # Number types
//!
//! Tableau values arrive as floats. Costs under the Big-M method are pairs of a real part and a
//! multiple of the symbolic constant `M`, and all values are shown to the user with the same
//! rounding rule.
pub mod big_m;
pub mod format;
