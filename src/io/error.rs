//! # Error reporting for reading of linear programs
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::fmt;
use std::io;

use thiserror::Error;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum Import {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("Could not read the problem file: {0}")]
    IO(#[from] io::Error),
    /// Contents of the text could not be parsed into a linear program.
    #[error(transparent)]
    Parse(#[from] Parse),
    /// The text was read, but the pieces don't fit together.
    #[error(transparent)]
    LinearProgram(#[from] Inconsistency),
}

/// Shorthand for results of the parsing stage.
pub type ParseResult<T> = Result<T, Parse>;

/// A `Parse` error represents all errors encountered during parsing.
///
/// Most malformed input is read leniently; the variants that mention a `FileLocation` are only
/// created when parsing strictly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Parse {
    /// One of the fields that make up a linear program was never given.
    #[error("Missing required field \"{0}\" (c, A and b are all required).")]
    MissingField(Field),
    /// No `x1`, `x2`, ... tokens appear in the text.
    #[error("No variables (x1, x2...) found.")]
    NoVariables,
    /// A variable number is too large for a dense row to be allocated.
    #[error("Variable x{index} is beyond the largest supported variable x{limit}.")]
    TooManyVariables {
        /// The largest variable number in the text.
        index: usize,
        /// The largest variable number that is accepted.
        limit: usize,
    },
    /// A token that should be a number isn't one.
    #[error("Could not read \"{text}\" as a number, {location}.")]
    MalformedNumber {
        /// The offending token.
        text: String,
        /// Where it was found.
        location: FileLocation,
    },
    /// A constraint line that doesn't separate its terms from the right-hand side with `=`.
    #[error("Constraint without \"=\", {location}.")]
    MissingRelation {
        /// The offending constraint.
        location: FileLocation,
    },
}

/// The three fields that are required in the standardized format.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    C,
    A,
    B,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::C => "c",
            Field::A => "A",
            Field::B => "b",
        })
    }
}

/// A `FileLocation` references a line in the text by its line number, counting from 1, and
/// contains a copy of the line itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocation {
    /// Line number, counting from 1.
    pub line_number: usize,
    /// Contents of the line.
    pub line: String,
}

impl FileLocation {
    /// Create a location from a numbered line.
    pub fn new(line_number: usize, line: &str) -> Self {
        Self { line_number, line: line.to_string(), }
    }
}

impl fmt::Display for FileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "caused at line {}: \"{}\"", self.line_number, self.line)
    }
}

/// An `Inconsistency` is returned when the linear program is inconsistently represented in the
/// text.
///
/// This error is not returned when the linear program is infeasible or unbounded; this crate
/// never looks at that. It is meant only for descriptions of linear programs whose dimensions
/// don't agree.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Inconsistent linear program: {description}")]
pub struct Inconsistency {
    description: String,
}

impl Inconsistency {
    /// Wrap a text in an `Inconsistency`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), }
    }
}
