//! # Importing COPT files
//!
//! Reading of linear programs written in the algebraic notation of the COPT solver:
//!
//! ```text
//! minimize
//!   obj: 2 x1 + 4 x2 + M x5 + M x6
//! subject to
//!   c1: x1 + 2 x2 - x3 + x5 = 4
//!   c2: - x1 + 2 x2 - x4 + x6 = 6
//! bounds
//! end
//! ```
//!
//! Variables are named `x1`, `x2`, ...; their number determines the column. The bounds section is
//! skipped, variables are nonnegative.
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::elements::{Objective, PivotRule};
use crate::io::Leniency;
use crate::io::copt::term::{max_variable, terms};
use crate::io::copt::token::{BOUNDS, END, LABEL_SEPARATOR, MAXIMIZE, MINIMIZE, RELATION, SUBJECT_TO};
use crate::io::error::{FileLocation, Import, Parse as ParseError, ParseResult};
use crate::io::number::parse_real;

pub mod term;
mod token;

/// Largest variable number that is read.
///
/// Every row of the program is dense, with one entry per variable up to the largest number.
pub const MAX_VARIABLES: usize = 1 << 16;

/// A COPT file is divided into sections.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Section {
    /// Before the objective, or in a section that isn't read.
    Skipped,
    Objective,
    Constraints,
}

/// The lines of the program, sorted by section.
#[derive(Debug, Eq, PartialEq)]
struct Sections<'a> {
    direction: Objective,
    /// Expressions that together make up the objective function.
    objective: Vec<&'a str>,
    /// Numbered constraint lines, still containing their labels.
    constraints: Vec<(usize, &'a str)>,
}

/// Parse a linear program in the COPT notation.
///
/// # Arguments
///
/// * `program`: The entire text.
/// * `leniency`: Whether numbers that can't be read and constraints without `=` are absorbed.
///
/// # Errors
///
/// If no variables appear in the text, or if a variable number exceeds `MAX_VARIABLES`. When
/// parsing strictly, also when a constraint contains a value that is not a number or has no `=`.
pub fn parse(program: &str, leniency: Leniency) -> Result<CanonicalForm, Import> {
    let nr_variables = max_variable(program)
        .filter(|&nr_variables| nr_variables > 0)
        .ok_or(ParseError::NoVariables)?;
    if nr_variables > MAX_VARIABLES {
        return Err(ParseError::TooManyVariables { index: nr_variables, limit: MAX_VARIABLES }.into());
    }

    let Sections { direction, objective, constraints } = into_sections(program);
    let objective = parse_objective(&objective.join(" "), nr_variables);
    let (constraint_matrix, rhs) = parse_constraints(&constraints, nr_variables, leniency)?;
    log::debug!(
        "Read {} variables and {} constraints, {}", nr_variables, rhs.len(), direction,
    );

    Ok(CanonicalForm::new(objective, constraint_matrix, rhs, direction, PivotRule::Bland)?)
}

/// Walk through the program, line by line, and collect the lines of each section.
///
/// The objective header (`min...` or `max...`) is itself part of the objective: an expression
/// after its label, or on the same line, is read.
fn into_sections(program: &str) -> Sections<'_> {
    let mut section = Section::Skipped;
    let mut sections = Sections {
        direction: Objective::Minimize,
        objective: Vec::new(),
        constraints: Vec::new(),
    };

    let lines = program.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());
    for (number, line) in lines {
        let lower = line.to_lowercase();

        if lower.starts_with(MINIMIZE) || lower.starts_with(MAXIMIZE) {
            sections.direction = if lower.starts_with(MINIMIZE) {
                Objective::Minimize
            } else {
                Objective::Maximize
            };
            section = Section::Objective;
            sections.objective.push(after_label(line));
        } else if lower.starts_with(SUBJECT_TO) {
            section = Section::Constraints;
        } else if lower.starts_with(BOUNDS) || lower.starts_with(END) {
            section = Section::Skipped;
        } else {
            match section {
                Section::Objective => sections.objective.push(after_label(line)),
                Section::Constraints => sections.constraints.push((number, line)),
                Section::Skipped => log::debug!("Skipping line {}: \"{}\"", number, line),
            }
        }
    }

    sections
}

/// Everything after the first label separator, or the entire line if there is none.
fn after_label(line: &str) -> &str {
    line.split_once(LABEL_SEPARATOR).map_or(line, |(_, expression)| expression)
}

/// Build the cost vector from the objective expression.
///
/// Coefficients are kept as text, such that `M` terms are preserved. Variables that don't appear
/// get a zero coefficient, and when a variable appears more than once, the last term counts.
fn parse_objective(expression: &str, nr_variables: usize) -> Vec<String> {
    let mut objective = vec!["0".to_string(); nr_variables];

    for term in terms(expression) {
        match term.variable.checked_sub(1) {
            Some(column) => objective[column] = term.coefficient,
            None => log::debug!("Ignoring term of variable number 0 in the objective"),
        }
    }

    objective
}

/// Build the constraint matrix and right-hand side from the constraint lines.
///
/// Each line contributes one row. Like in the objective, the last term of a variable counts.
fn parse_constraints(
    lines: &[(usize, &str)],
    nr_variables: usize,
    leniency: Leniency,
) -> ParseResult<(Vec<Vec<f64>>, Vec<f64>)> {
    let mut constraint_matrix = Vec::with_capacity(lines.len());
    let mut rhs = Vec::with_capacity(lines.len());

    for &(number, line) in lines {
        let location = || FileLocation::new(number, line);

        let mut sides = after_label(line).split(RELATION);
        let (Some(left), Some(right)) = (sides.next(), sides.next()) else {
            match leniency {
                Leniency::Lenient => {
                    log::warn!("Skipping constraint without \"{}\" on line {}", RELATION, number);
                    continue
                },
                Leniency::Strict => return Err(ParseError::MissingRelation { location: location() }),
            }
        };

        let mut row = vec![0f64; nr_variables];
        for term in terms(left) {
            if let Some(column) = term.variable.checked_sub(1) {
                row[column] = parse_real(&term.coefficient, leniency, location)?;
            }
        }

        rhs.push(parse_real(right, leniency, location)?);
        constraint_matrix.push(row);
    }

    Ok((constraint_matrix, rhs))
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{Objective, PivotRule};
    use crate::io::Leniency;
    use crate::io::copt::{into_sections, MAX_VARIABLES, parse, Sections};
    use crate::io::error::{FileLocation, Import, Parse};

    const COPT_STRING: &str = "
Minimize
  obj: 2 x1 + 4 x2 + M x5 + M x6
Subject To
  c1: x1 + 2 x2 - x3 + x5 = 4
  c2: - x1 + 2 x2 - x4 + x6 = 6
Bounds
End";

    #[test]
    fn sections() {
        let result = into_sections(COPT_STRING);
        let expected = Sections {
            direction: Objective::Minimize,
            objective: vec!["Minimize", " 2 x1 + 4 x2 + M x5 + M x6"],
            constraints: vec![
                (5, "c1: x1 + 2 x2 - x3 + x5 = 4"),
                (6, "c2: - x1 + 2 x2 - x4 + x6 = 6"),
            ],
        };

        assert_eq!(result, expected);
    }

    #[test]
    fn big_m() {
        let form = parse(COPT_STRING, Leniency::Lenient).unwrap();

        assert_eq!(form.objective(), ["2", "4", "0", "0", "M", "M"]);
        assert_eq!(form.constraint_matrix(), [
            vec![1f64, 2f64, -1f64, 0f64, 1f64, 0f64],
            vec![-1f64, 2f64, 0f64, -1f64, 0f64, 1f64],
        ]);
        assert_eq!(form.rhs(), [4f64, 6f64]);
        assert_eq!(form.direction(), Objective::Minimize);
        assert_eq!(form.pivot_rule(), PivotRule::Bland);
    }

    #[test]
    fn objective_on_header_line() {
        let form = parse("min: 2 x1 + 3x2 - x3\nsubject to\nc1: x1 = 1\nend", Leniency::Lenient).unwrap();
        assert_eq!(form.objective(), ["2", "3", "-1"]);
    }

    #[test]
    fn untouched_variables_cost_nothing() {
        let form = parse("max: x3\nsubject to\nc1: x1 + x2 = 2\nend", Leniency::Lenient).unwrap();

        assert_eq!(form.objective(), ["0", "0", "1"]);
        assert_eq!(form.direction(), Objective::Maximize);
    }

    #[test]
    fn constraint_row() {
        let form = parse("min: x1 + x2\nsubject to\nc1: x1 + 2x2 = 4\nend", Leniency::Lenient).unwrap();

        assert_eq!(form.constraint_matrix(), [vec![1f64, 2f64]]);
        assert_eq!(form.rhs(), [4f64]);
    }

    #[test]
    fn objective_over_multiple_lines() {
        let program = "maximize\n obj: 2x1\n 3x2\nsubject to\nend";
        let form = parse(program, Leniency::Lenient).unwrap();

        assert_eq!(form.objective(), ["2", "3"]);
        assert_eq!(form.nr_constraints(), 0);
    }

    #[test]
    fn duplicates_overwrite() {
        let program = "min: x1 + 2x1\nsubject to\nc1: 3x1 + x1 = 1\nend";
        let form = parse(program, Leniency::Lenient).unwrap();

        assert_eq!(form.objective(), ["2"]);
        assert_eq!(form.constraint_matrix(), [vec![1f64]]);
    }

    #[test]
    fn no_variables() {
        let result = parse("bound\nend", Leniency::Lenient);
        assert!(matches!(result, Err(Import::Parse(Parse::NoVariables))));
    }

    #[test]
    fn only_variable_zero() {
        let result = parse("min: x0\nend", Leniency::Lenient);
        assert!(matches!(result, Err(Import::Parse(Parse::NoVariables))));
    }

    #[test]
    fn variable_number_too_large() {
        for program in ["min: x18446744073709551615\nend", "min: x1 + x4294967296\nend"] {
            let result = parse(program, Leniency::Lenient);
            assert!(matches!(
                result,
                Err(Import::Parse(Parse::TooManyVariables { limit: MAX_VARIABLES, .. })),
            ));
        }
    }

    #[test]
    fn largest_variable_number() {
        let program = format!("min: x{}\nsubject to\nc1: x1 = 1\nend", MAX_VARIABLES);
        let form = parse(&program, Leniency::Lenient).unwrap();

        assert_eq!(form.nr_variables(), MAX_VARIABLES);
        assert_eq!(form.objective()[MAX_VARIABLES - 1], "1");
    }

    #[test]
    fn missing_relation() {
        let program = "min: x1\nsubject to\nc1: x1 + x2 >\nc2: x2 = 3\nend";

        let lenient = parse(program, Leniency::Lenient).unwrap();
        assert_eq!(lenient.constraint_matrix(), [vec![0f64, 1f64]]);
        assert_eq!(lenient.rhs(), [3f64]);

        let strict = parse(program, Leniency::Strict);
        match strict {
            Err(Import::Parse(error)) => assert_eq!(error, Parse::MissingRelation {
                location: FileLocation::new(3, "c1: x1 + x2 >"),
            }),
            other => panic!("Expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn inequalities_are_read_as_equalities() {
        let program = "min: x1\nsubject to\nc1: x1 + x2 <= 3\nc2: x1 >= 1\nend";
        let form = parse(program, Leniency::Lenient).unwrap();

        assert_eq!(form.constraint_matrix(), [vec![1f64, 1f64], vec![1f64, 0f64]]);
        assert_eq!(form.rhs(), [3f64, 1f64]);
    }

    #[test]
    fn big_m_in_constraint() {
        let program = "min: x1\nsubject to\nc1: M x1 = 3\nend";

        let lenient = parse(program, Leniency::Lenient).unwrap();
        assert!(lenient.constraint_matrix()[0][0].is_nan());

        let strict = parse(program, Leniency::Strict);
        assert!(matches!(strict, Err(Import::Parse(Parse::MalformedNumber { .. }))));
    }

    #[test]
    fn constraint_without_label() {
        let form = parse("min: x1\nsubject to\nx1 = 2\nend", Leniency::Lenient).unwrap();
        assert_eq!(form.rhs(), [2f64]);
    }
}
