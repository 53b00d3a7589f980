//! # Canonical form
//!
//! The single normalized representation produced by every parser and consumed by the solver.
use crate::data::linear_program::elements::{Objective, PivotRule};
use crate::io::error::Inconsistency;

/// A linear program in `CanonicalForm` consists of a dense constraint matrix, a right-hand side
/// with one value per constraint and a cost vector with one coefficient term per column.
///
/// Cost coefficients are kept as text, such that Big-M terms like `"M"`, `"-M"` or `"3M"` survive
/// until they are split into their real and `M` parts.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalForm {
    objective: Vec<String>,
    constraint_matrix: Vec<Vec<f64>>,
    rhs: Vec<f64>,
    direction: Objective,
    pivot_rule: PivotRule,
}

impl CanonicalForm {
    /// Create a new linear program in canonical form.
    ///
    /// # Arguments
    ///
    /// * `objective`: One coefficient term per column.
    /// * `constraint_matrix`: Row major, one row per constraint.
    /// * `rhs`: One value per constraint.
    ///
    /// # Errors
    ///
    /// If the dimensions don't agree: rows of different width, a cost vector that doesn't match
    /// the row width or a right-hand side that doesn't match the number of rows.
    pub fn new(
        objective: Vec<String>,
        constraint_matrix: Vec<Vec<f64>>,
        rhs: Vec<f64>,
        direction: Objective,
        pivot_rule: PivotRule,
    ) -> Result<Self, Inconsistency> {
        if let Some((i, row)) = constraint_matrix.iter().enumerate()
            .find(|(_, row)| row.len() != objective.len()) {
            return Err(Inconsistency::new(format!(
                "Constraint row {} has {} coefficients, but the objective has {} terms.",
                i + 1, row.len(), objective.len(),
            )));
        }
        if constraint_matrix.len() != rhs.len() {
            return Err(Inconsistency::new(format!(
                "There are {} constraint rows, but {} right-hand side values.",
                constraint_matrix.len(), rhs.len(),
            )));
        }

        Ok(Self { objective, constraint_matrix, rhs, direction, pivot_rule, })
    }

    /// Cost coefficient terms, one per column.
    pub fn objective(&self) -> &[String] {
        &self.objective
    }
    /// The constraint matrix `A`, row major.
    pub fn constraint_matrix(&self) -> &[Vec<f64>] {
        &self.constraint_matrix
    }
    /// The right-hand side `b`.
    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }
    /// Direction of optimization.
    pub fn direction(&self) -> Objective {
        self.direction
    }
    /// Pivot rule hint for the solver.
    pub fn pivot_rule(&self) -> PivotRule {
        self.pivot_rule
    }
    /// Get the number of variables.
    pub fn nr_variables(&self) -> usize {
        self.objective.len()
    }
    /// Get the number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.rhs.len()
    }
}
