//! # Narrating the Simplex method
//!
//! Linear programs are read from one of several textual notations into a canonical form, which an
//! external solver turns into a sequence of tableaus. This crate reconstructs from that sequence
//! the steps of the Simplex method as described in the book Combinatorial Optimization by
//! Christos H. Papadimitriou and Kenneth Steiglitz: which variable enters, which one leaves, how
//! the reduced costs split under the Big-M method and which basic feasible solutions are visited.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
