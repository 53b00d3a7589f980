//! # Exchanging linear programs with a solver
//!
//! The Simplex method itself runs in an external solver. It receives a linear program as JSON and
//! answers with the sequence of tableaus it went through, or with an error message.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::reconstruct::{Pivot, Snapshot};
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::elements::PivotRule;
use crate::data::number_types::big_m::BigM;

/// A linear program as the solver expects it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Cost coefficient terms, which may contain `M`.
    #[serde(rename = "c_T")]
    pub cost: Vec<String>,
    #[allow(missing_docs)]
    #[serde(rename = "A")]
    pub constraints: Vec<Vec<f64>>,
    #[allow(missing_docs)]
    #[serde(rename = "b_T")]
    pub rhs: Vec<f64>,
    #[allow(missing_docs)]
    pub is_minimize: bool,
    #[allow(missing_docs)]
    pub pivot_rule: PivotRule,
}

impl From<&CanonicalForm> for SolveRequest {
    fn from(form: &CanonicalForm) -> Self {
        Self {
            cost: form.objective().to_vec(),
            constraints: form.constraint_matrix().to_vec(),
            rhs: form.rhs().to_vec(),
            is_minimize: form.direction().is_minimize(),
            pivot_rule: form.pivot_rule(),
        }
    }
}

/// A tableau as the solver sends it.
///
/// Reduced costs and the objective value arrive split in a real and an `M` part. The solver
/// writes `[-1, -1]` when there is no pivot; any pivot with a negative coordinate is read as no
/// pivot.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawSnapshot {
    pub basis: Vec<usize>,
    #[serde(rename = "A")]
    pub constraints: Vec<Vec<f64>>,
    #[serde(rename = "b")]
    pub rhs: Vec<f64>,
    #[serde(rename = "r_R")]
    pub reduced_costs_real: Vec<f64>,
    #[serde(rename = "r_M")]
    pub reduced_costs_m: Vec<f64>,
    #[serde(rename = "neg_obj_R")]
    pub objective_value_real: f64,
    #[serde(rename = "neg_obj_M")]
    pub objective_value_m: f64,
    pub next_pivot: [i64; 2],
}

impl From<RawSnapshot> for Snapshot {
    fn from(raw: RawSnapshot) -> Self {
        let next_pivot = match raw.next_pivot {
            [row, column] if row >= 0 && column >= 0 => Some(Pivot {
                row: row as usize,
                column: column as usize,
            }),
            _ => None,
        };

        Self {
            basis: raw.basis,
            constraints: raw.constraints,
            rhs: raw.rhs,
            reduced_costs: raw.reduced_costs_real.into_iter()
                .zip(raw.reduced_costs_m)
                .map(|(real, m)| BigM::new(real, m))
                .collect(),
            objective_value: BigM::new(raw.objective_value_real, raw.objective_value_m),
            next_pivot,
        }
    }
}

/// The answer of the solver.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    /// Tableaus in the order in which they were produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<RawSnapshot>>,
    /// Reason why the solver could not produce tableaus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The solver didn't deliver tableaus.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The solver explained what went wrong.
    #[error("{0}")]
    Reported(String),
    /// The response contains neither tableaus nor an error.
    #[error("The solver response contains no steps.")]
    Empty,
}

impl SolveResponse {
    /// Take the tableaus out of the response.
    ///
    /// # Errors
    ///
    /// If the solver reported an error, even when tableaus are also present, or if there are no
    /// tableaus at all.
    pub fn into_snapshots(self) -> Result<Vec<Snapshot>, SolverError> {
        match (self.error, self.steps) {
            (Some(message), _) if !message.is_empty() => Err(SolverError::Reported(message)),
            (_, Some(steps)) => Ok(steps.into_iter().map(Snapshot::from).collect()),
            (_, None) => Err(SolverError::Empty),
        }
    }
}
