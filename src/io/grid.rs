//! # Reading a tableau grid
//!
//! A linear program entered cell by cell in a table: a row of cost coefficient terms, and for each
//! constraint a right-hand side followed by its coefficients. Cells arrive as the text that was
//! typed into them.
use std::sync::LazyLock;

use regex::Regex;

use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::elements::{Objective, PivotRule};
use crate::io::error::Inconsistency;

/// Build a linear program from the cells of a grid.
///
/// Cost cells are kept as text (trimmed), such that Big-M terms survive. Numeric cells are read up
/// to the first character that doesn't fit a number; cells that are empty or don't start with a
/// number count as zero, as an untouched input cell would.
///
/// # Arguments
///
/// * `cost`: One cell per column.
/// * `constraints`: One row of cells per constraint, one cell per column.
/// * `rhs`: One cell per constraint.
///
/// # Errors
///
/// If the number of cells doesn't match between the cost row, the constraint rows and the
/// right-hand side.
pub fn import<S: AsRef<str>>(
    cost: &[S],
    constraints: &[Vec<S>],
    rhs: &[S],
    direction: Objective,
    pivot_rule: PivotRule,
) -> Result<CanonicalForm, Inconsistency> {
    let cost = cost.iter().map(|cell| cell.as_ref().trim().to_string()).collect();
    let constraints = constraints.iter()
        .map(|row| row.iter().map(read_cell).collect())
        .collect();
    let rhs = rhs.iter().map(read_cell).collect();

    CanonicalForm::new(cost, constraints, rhs, direction, pivot_rule)
}

/// The longest prefix of a cell that reads as a number.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("Number pattern is valid.")
});

/// Read the number at the start of a cell, ignoring whatever follows it.
///
/// `"3abc"` reads as 3. A cell that doesn't start with a number, or that reads as NaN or negative
/// zero, counts as 0.
fn read_cell<S: AsRef<str>>(cell: &S) -> f64 {
    LEADING_NUMBER.find(cell.as_ref().trim())
        .and_then(|number| number.as_str().parse::<f64>().ok())
        .filter(|value| !value.is_nan())
        .map_or(0f64, |value| value + 0f64)
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{Objective, PivotRule};
    use crate::io::grid::{import, read_cell};

    #[test]
    fn big_m() {
        let form = import(
            &["2", "4", "0", "0", " M", "M "],
            &[vec!["1", "2", "-1", "0", "1", "0"], vec!["-1", "2", "0", "-1", "0", "1"]],
            &["4", "6"],
            Objective::Minimize,
            PivotRule::Bland,
        ).unwrap();

        assert_eq!(form.objective(), ["2", "4", "0", "0", "M", "M"]);
        assert_eq!(form.constraint_matrix()[1], vec![-1f64, 2f64, 0f64, -1f64, 0f64, 1f64]);
        assert_eq!(form.rhs(), [4f64, 6f64]);
    }

    #[test]
    fn empty_cells_are_zero() {
        let form = import(
            &["1", "1"],
            &[vec!["", "abc"]],
            &["NaN"],
            Objective::Maximize,
            PivotRule::MaxCoefficient,
        ).unwrap();

        assert_eq!(form.constraint_matrix(), [vec![0f64, 0f64]]);
        assert_eq!(form.rhs(), [0f64]);
    }

    #[test]
    fn leading_number() {
        assert_eq!(read_cell(&"3abc"), 3f64);
        assert_eq!(read_cell(&" -2.5e1x"), -25f64);
        assert_eq!(read_cell(&".5"), 0.5);
        assert_eq!(read_cell(&"4."), 4f64);
        assert_eq!(read_cell(&"1e"), 1f64);
        assert_eq!(read_cell(&"-Infinity"), f64::NEG_INFINITY);
        assert_eq!(read_cell(&"abc3"), 0f64);
        assert_eq!(read_cell(&"-"), 0f64);
        assert!(read_cell(&"-0").is_sign_positive());
    }

    #[test]
    fn mismatched_grid() {
        let result = import(
            &["1", "1"],
            &[vec!["1"]],
            &["1"],
            Objective::Minimize,
            PivotRule::Bland,
        );
        assert!(result.is_err());
    }
}
