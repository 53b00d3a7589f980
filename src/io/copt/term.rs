//! # Reading terms
//!
//! Both the objective and the left-hand side of each constraint are sums of terms like `2 x1`,
//! `- x3` or `+ 3.5M x2`. Scanning is stateless: every call produces a fresh lazy sequence of
//! matches.
use std::sync::LazyLock;

use regex::Regex;

use crate::io::copt::token::VARIABLE_PREFIX;

/// An optional sign, an optional magnitude (which may contain `M`) and a variable.
static TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"([+-]?\s*[0-9.M]*)\s*{}([0-9]+)", VARIABLE_PREFIX))
        .expect("Term pattern is valid.")
});

/// A variable on its own.
static VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}([0-9]+)", VARIABLE_PREFIX)).expect("Variable pattern is valid.")
});

/// A single term of a linear expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Normalized coefficient text: no whitespace, no leading `+` and never empty.
    pub coefficient: String,
    /// Number of the variable as written, counting from 1.
    pub variable: usize,
}

/// Iterate over the terms in an expression, in order of appearance.
///
/// Text between terms that doesn't fit the pattern is skipped, as are terms whose variable
/// number is too large to represent.
pub fn terms(expression: &str) -> impl Iterator<Item = Term> + '_ {
    TERM.captures_iter(expression).filter_map(|captures| {
        let variable = captures[2].parse().ok()?;
        Some(Term { coefficient: normalize_coefficient(&captures[1]), variable, })
    })
}

/// The largest variable number appearing anywhere in the text.
///
/// # Return value
///
/// `None` if there are no variables at all.
pub fn max_variable(text: &str) -> Option<usize> {
    VARIABLE.captures_iter(text)
        .filter_map(|captures| captures[1].parse::<usize>().ok())
        .max()
}

/// Remove whitespace and a leading `+`, and make an implicit magnitude of one explicit.
fn normalize_coefficient(raw: &str) -> String {
    let compact = raw.split_whitespace().collect::<String>();
    match compact.strip_prefix('+').unwrap_or(compact.as_str()) {
        "" => "1".to_string(),
        "-" => "-1".to_string(),
        coefficient => coefficient.to_string(),
    }
}
