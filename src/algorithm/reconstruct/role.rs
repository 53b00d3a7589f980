//! # Variable roles
//!
//! Before a pivot, one variable is about to enter the basis and one is about to leave it. The
//! other basic variables stay.
use enum_map::{Enum, EnumMap, enum_map};
use serde::Serialize;

use crate::algorithm::reconstruct::Pivot;

/// The part a column plays in the upcoming pivot.
#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Selected to enter the basis.
    Entering,
    /// Basic in the pivot row, so it leaves the basis.
    Leaving,
    /// Basic in another row, stays in the basis.
    BasisMember,
    /// Not involved; also every column of a step without pivot.
    None,
}

/// A pivot resolved against a basis: the column that enters and the variable that leaves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Exchange {
    pub row: usize,
    pub entering: usize,
    pub leaving: usize,
}

impl Exchange {
    /// Find out which variable leaves in a pivot.
    ///
    /// # Return value
    ///
    /// `None` if there is no pivot, or if the pivot row is not a row of the basis.
    pub(crate) fn new(basis: &[usize], next_pivot: Option<Pivot>) -> Option<Self> {
        let Pivot { row, column } = next_pivot?;
        let &leaving = basis.get(row)?;

        Some(Self { row, entering: column, leaving, })
    }
}

/// Determine the role of each column.
///
/// # Arguments
///
/// * `basis`: For each row, the basic variable.
/// * `next_pivot`: The upcoming pivot, if any.
/// * `nr_columns`: Number of columns of the tableau.
///
/// # Return value
///
/// A role for every column. Without a pivot, all roles are `Role::None`. Otherwise exactly one
/// column is entering and at most one is leaving; the entering column takes precedence.
pub fn assign(basis: &[usize], next_pivot: Option<Pivot>, nr_columns: usize) -> Vec<Role> {
    let Some(exchange) = Exchange::new(basis, next_pivot) else {
        return vec![Role::None; nr_columns];
    };

    (0..nr_columns)
        .map(|column| {
            if column == exchange.entering {
                Role::Entering
            } else if column == exchange.leaving {
                Role::Leaving
            } else if basis.iter().enumerate()
                .any(|(row, &variable)| row != exchange.row && variable == column) {
                Role::BasisMember
            } else {
                Role::None
            }
        })
        .collect()
}

/// Combining characters that mark a variable name with its role.
///
/// A hat for entering, a caron for leaving and a macron for staying in the basis.
pub fn decorations() -> EnumMap<Role, Option<char>> {
    enum_map! {
        Role::Entering => Some('\u{0302}'),
        Role::Leaving => Some('\u{030C}'),
        Role::BasisMember => Some('\u{0304}'),
        Role::None => None,
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::reconstruct::Pivot;
    use crate::algorithm::reconstruct::role::{assign, decorations, Role};

    #[test]
    fn no_pivot() {
        assert_eq!(assign(&[3, 1], None, 4), vec![Role::None; 4]);
    }

    #[test]
    fn pivot() {
        let roles = assign(&[3, 1], Some(Pivot { row: 0, column: 2 }), 4);
        assert_eq!(roles, vec![Role::None, Role::BasisMember, Role::Entering, Role::Leaving]);
    }

    #[test]
    fn single_entering_and_leaving() {
        let roles = assign(&[4, 5, 0], Some(Pivot { row: 1, column: 1 }), 6);

        assert_eq!(roles.iter().filter(|&&role| role == Role::Entering).count(), 1);
        assert_eq!(roles.iter().filter(|&&role| role == Role::Leaving).count(), 1);
        assert_eq!(roles[5], Role::Leaving);
        assert_eq!(roles[0], Role::BasisMember);
        assert_eq!(roles[4], Role::BasisMember);
    }

    #[test]
    fn pivot_row_outside_basis() {
        let roles = assign(&[0], Some(Pivot { row: 3, column: 1 }), 2);
        assert_eq!(roles, vec![Role::None; 2]);
    }

    #[test]
    fn decorated_roles() {
        let decorations = decorations();
        assert_eq!(decorations[Role::Entering], Some('\u{0302}'));
        assert_eq!(decorations[Role::None], None);
    }
}
