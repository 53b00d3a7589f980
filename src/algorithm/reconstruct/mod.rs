//! # Reconstructing the steps of the Simplex method
//!
//! A solver reports its progress as a sequence of tableaus. From these, the steps are rebuilt as
//! they would be written down by hand: the tableau before the costs are reduced, which variable
//! enters and which one leaves at every pivot, and which basic feasible solutions are visited.
//!
//! The tableaus are trusted: the basis has one variable per row and pivots point into the
//! tableau. Nothing is validated.
use std::fmt;

use itertools::Itertools;
use num_traits::Zero;
use serde::Serialize;

use crate::algorithm::reconstruct::role::{decorations, Exchange, Role};
use crate::data::number_types::big_m::BigM;
use crate::data::number_types::format::smart_format;

pub mod role;

/// Position of a pivot element in the tableau.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pivot {
    /// Row of the constraint matrix, which is also the basis position of the leaving variable.
    pub row: usize,
    /// Column of the entering variable.
    pub column: usize,
}

/// A tableau as reported by the solver.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// For each row, the index of the variable that is basic in that row.
    pub basis: Vec<usize>,
    /// Current constraint matrix, row major.
    pub constraints: Vec<Vec<f64>>,
    /// Current right-hand side, the values of the basic variables.
    pub rhs: Vec<f64>,
    /// One reduced cost per column.
    pub reduced_costs: Vec<BigM>,
    /// The objective value, negated as it appears in the tableau.
    pub objective_value: BigM,
    /// The pivot the solver will perform next, `None` if the tableau is final.
    pub next_pivot: Option<Pivot>,
}

/// Caption of a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// The tableau with the original costs, before any reduction.
    Initial,
    /// The `n`'th tableau reported by the solver, counting from 0.
    Step(usize),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Initial => f.write_str("Initial Tableau (Pre-reduction)"),
            Label::Step(index) => write!(f, "Step {}", index),
        }
    }
}

/// What happens in a step, in short.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Analysis {
    /// The tableau before the costs were reduced.
    Initialized,
    /// A pivot follows.
    Pivot {
        /// Column with an improving reduced cost.
        entering: usize,
        /// Variable that reaches zero first in the minimum ratio test.
        leaving: usize,
    },
    /// No pivot follows: the solution is optimal.
    Optimal,
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Analysis::Initialized => f.write_str("Tableau initialized."),
            Analysis::Pivot { entering, leaving } => {
                write!(f, "Entering: x{}, leaving: x{}.", entering + 1, leaving + 1)
            },
            Analysis::Optimal => f.write_str("Optimal solution found."),
        }
    }
}

/// A tableau annotated for presentation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayStep {
    /// Caption.
    pub label: Label,
    /// The tableau itself.
    pub tableau: Snapshot,
    /// Role of every column in the upcoming pivot.
    pub roles: Vec<Role>,
    /// Value of every decision variable in the basic feasible solution of this tableau.
    pub x: Vec<f64>,
    /// Summary.
    pub analysis: Analysis,
}

/// The basic feasible solutions visited, in order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SolutionPath(Vec<Vec<f64>>);

impl SolutionPath {
    /// All points, including the one of the tableau before cost reduction.
    pub fn points(&self) -> &[Vec<f64>] {
        &self.0
    }

    /// The points the solver actually moved through: all but the first.
    ///
    /// The first point belongs to the tableau before cost reduction, which has the same basis as
    /// the first tableau of the solver.
    pub fn trajectory(&self) -> &[Vec<f64>] {
        self.0.get(1..).unwrap_or(&[])
    }
}

/// All steps of a Simplex run, ready to be shown.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Reconstruction {
    /// The tableau before cost reduction, followed by one step per solver tableau.
    pub steps: Vec<DisplayStep>,
    /// One point per step.
    pub path: SolutionPath,
}

/// Rebuild the steps of a Simplex run.
///
/// # Arguments
///
/// * `objective`: Cost coefficient terms of the linear program, one per decision variable.
/// * `snapshots`: Tableaus in the order the solver produced them.
///
/// # Return value
///
/// A step for the tableau before cost reduction, followed by a step for each snapshot, and the
/// path through their basic feasible solutions. Empty if there are no snapshots.
pub fn reconstruct<S: AsRef<str>>(objective: &[S], snapshots: &[Snapshot]) -> Reconstruction {
    let Some(first) = snapshots.first() else {
        return Reconstruction::default();
    };

    let nr_decision_variables = objective.len();
    let tableaus = Some((Label::Initial, initial_snapshot(objective, first))).into_iter()
        .chain(snapshots.iter().cloned().enumerate().map(|(i, snapshot)| (Label::Step(i), snapshot)));

    let mut path = Vec::with_capacity(snapshots.len() + 1);
    let steps = tableaus
        .map(|(label, tableau)| {
            let step = annotate(label, tableau, nr_decision_variables);
            log::debug!(
                "{}: basis {:?}, x {:?}, {}", step.label, step.tableau.basis, step.x, step.analysis,
            );
            path.push(step.x.clone());
            step
        })
        .collect();

    Reconstruction { steps, path: SolutionPath(path), }
}

/// The tableau before cost reduction.
///
/// It has the basis, constraints and right-hand side of the first tableau of the solver, but the
/// original costs as reduced costs and a zero objective value. There is no pivot.
pub fn initial_snapshot<S: AsRef<str>>(objective: &[S], first: &Snapshot) -> Snapshot {
    Snapshot {
        basis: first.basis.clone(),
        constraints: first.constraints.clone(),
        rhs: first.rhs.clone(),
        reduced_costs: objective.iter().map(|term| BigM::from_term(term.as_ref())).collect(),
        objective_value: BigM::zero(),
        next_pivot: None,
    }
}

/// Read the basic feasible solution from a tableau.
///
/// Each basic decision variable takes the right-hand side value of its row; all other decision
/// variables are zero. Basic slack and artificial variables are not part of the result.
pub fn basic_feasible_solution(snapshot: &Snapshot, nr_decision_variables: usize) -> Vec<f64> {
    let mut x = vec![0f64; nr_decision_variables];
    for (&variable, &value) in snapshot.basis.iter().zip(&snapshot.rhs) {
        if variable < nr_decision_variables {
            x[variable] = value;
        }
    }

    x
}

fn annotate(label: Label, tableau: Snapshot, nr_decision_variables: usize) -> DisplayStep {
    let x = basic_feasible_solution(&tableau, nr_decision_variables);
    let roles = role::assign(&tableau.basis, tableau.next_pivot, tableau.reduced_costs.len());
    let analysis = match Exchange::new(&tableau.basis, tableau.next_pivot) {
        Some(Exchange { entering, leaving, .. }) => Analysis::Pivot { entering, leaving },
        None if label == Label::Initial => Analysis::Initialized,
        None => Analysis::Optimal,
    };

    DisplayStep { label, tableau, roles, x, analysis, }
}

/// Writes the step as a plain text tableau.
///
/// The header names the variables, marked with their role. Below it the basic feasible solution,
/// then the objective row (objective value first, then the reduced costs) and the constraint rows
/// (right-hand side first). The pivot element is starred.
impl fmt::Display for DisplayStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decorations = decorations();
        let pivot = self.tableau.next_pivot;

        writeln!(f, "{}", self.label)?;
        writeln!(f, "variable | {}", self.roles.iter().enumerate()
            .map(|(j, &role)| match decorations[role] {
                Some(mark) => format!("x{}{}", mark, j + 1),
                None => format!("x{}", j + 1),
            })
            .join(" | "))?;
        writeln!(f, "x values | {}", self.x.iter().map(|&value| smart_format(value)).join(" | "))?;
        writeln!(f, "{} | {}", self.tableau.objective_value, self.tableau.reduced_costs.iter().join(" | "))?;
        for (i, (row, &rhs)) in self.tableau.constraints.iter().zip(&self.tableau.rhs).enumerate() {
            writeln!(f, "{} | {}", smart_format(rhs), row.iter().enumerate()
                .map(|(j, &value)| {
                    let is_pivot = pivot == Some(Pivot { row: i, column: j });
                    format!("{}{}", smart_format(value), if is_pivot { "*" } else { "" })
                })
                .join(" | "))?;
        }
        write!(f, "{}", self.analysis)
    }
}
