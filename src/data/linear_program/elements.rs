//! # Building blocks to describe linear programs.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Objective {
    /// Whether the solver should minimize.
    pub fn is_minimize(self) -> bool {
        self == Objective::Minimize
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Objective::Maximize => "maximize",
            Objective::Minimize => "minimize",
        })
    }
}

/// Deciding how the solver pivots.
///
/// This is only a hint for the external solver; nothing in this crate selects pivots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PivotRule {
    /// Pivot on the first column with an improving reduced cost.
    #[default]
    #[serde(rename = "bland")]
    Bland,
    /// Pivot on the column with the most improving reduced cost, comparing the `M` part first.
    #[serde(rename = "max")]
    MaxCoefficient,
}

impl fmt::Display for PivotRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PivotRule::Bland => "bland",
            PivotRule::MaxCoefficient => "max",
        })
    }
}
