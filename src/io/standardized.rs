//! # The standardized notation
//!
//! A linear program written as `key: value` lines:
//!
//! ```text
//! c: 2, 4, 0, 0, M, M
//! A: 1, 2, -1, 0, 1, 0; -1, 2, 0, -1, 0, 1
//! b: 4, 6
//! obj: min
//! rule: bland
//! ```
//!
//! Keys are case insensitive. `c`, `A` and `b` are required, `obj` defaults to minimization and
//! `rule` to Bland's rule. Lines with another key, or without a colon, are ignored.
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::elements::{Objective, PivotRule};
use crate::io::Leniency;
use crate::io::error::{Field, FileLocation, Import, Parse, ParseResult};
use crate::io::number::parse_real;

/// Separates the key from the value on a line.
const KEY_SEPARATOR: char = ':';
/// Separates values in a list.
const VALUE_SEPARATOR: char = ',';
/// Separates rows of the constraint matrix.
const ROW_SEPARATOR: char = ';';

/// Parse a linear program in the standardized notation.
///
/// # Arguments
///
/// * `program`: The entire text.
/// * `leniency`: Whether numbers that can't be read are NaN or an error.
///
/// # Errors
///
/// If one of `c`, `A` or `b` is absent, if the dimensions of the three don't match, or, when
/// parsing strictly, if a value in `A` or `b` is not a number.
pub fn parse(program: &str, leniency: Leniency) -> Result<CanonicalForm, Import> {
    let mut cost: Option<Vec<String>> = None;
    let mut constraints = None;
    let mut rhs = None;
    let mut direction = Objective::default();
    let mut pivot_rule = PivotRule::default();

    for (number, line) in into_lines(program) {
        let Some((key, value)) = line.split_once(KEY_SEPARATOR) else {
            log::debug!("Ignoring line {} without a key: \"{}\"", number, line);
            continue;
        };
        let value = value.trim();
        let location = || FileLocation::new(number, line);

        match key.trim().to_lowercase().as_str() {
            "c" => cost = Some(value.split(VALUE_SEPARATOR).map(|s| s.trim().to_string()).collect()),
            "a" => constraints = Some(
                value.split(ROW_SEPARATOR)
                    .map(|row| parse_list(row, leniency, location))
                    .collect::<ParseResult<Vec<_>>>()?
            ),
            "b" => rhs = Some(parse_list(value, leniency, location)?),
            "obj" => direction = parse_direction(value),
            "rule" => pivot_rule = parse_pivot_rule(value),
            other => log::debug!("Ignoring unknown key \"{}\" on line {}", other, number),
        }
    }

    let cost = cost.ok_or(Parse::MissingField(Field::C))?;
    let constraints = constraints.ok_or(Parse::MissingField(Field::A))?;
    let rhs = rhs.ok_or(Parse::MissingField(Field::B))?;

    Ok(CanonicalForm::new(cost, constraints, rhs, direction, pivot_rule)?)
}

/// Split a text into numbered, trimmed lines, skipping empty ones.
///
/// Line numbers count from 1.
fn into_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_list(
    text: &str,
    leniency: Leniency,
    location: impl Fn() -> FileLocation + Copy,
) -> ParseResult<Vec<f64>> {
    text.split(VALUE_SEPARATOR)
        .map(|value| parse_real(value, leniency, location))
        .collect()
}

/// Only `min` means minimization; any other value maximizes.
fn parse_direction(value: &str) -> Objective {
    if value.to_lowercase() == "min" {
        Objective::Minimize
    } else {
        Objective::Maximize
    }
}

/// `maxcoeff`, written in any case and with any number of underscores, selects the largest
/// coefficient rule. Anything else is Bland's rule.
fn parse_pivot_rule(value: &str) -> PivotRule {
    if value.to_lowercase().replace('_', "") == "maxcoeff" {
        PivotRule::MaxCoefficient
    } else {
        PivotRule::Bland
    }
}
