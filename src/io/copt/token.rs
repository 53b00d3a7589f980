//! # Tokens used in COPT files
//!
//! Section headers are recognized by their prefix, in any case, such that `minimize`,
//! `Subject To` and `Bounds` are all understood.

/// Starts the objective section, minimizing.
pub const MINIMIZE: &str = "min";

/// Starts the objective section, maximizing.
pub const MAXIMIZE: &str = "max";

/// Starts the constraint section, as in `subject to`.
pub const SUBJECT_TO: &str = "sub";

/// Starts the bounds section, which is not read.
pub const BOUNDS: &str = "bound";

/// Marks the end of the program.
pub const END: &str = "end";

/// Separates a label, such as `obj` or `c1`, from the expression that follows it.
pub const LABEL_SEPARATOR: char = ':';

/// Separates the terms of a constraint from its right-hand side.
///
/// # Note
///
/// A `<` or `>` in front of it is ignored, constraints are read as equalities.
pub const RELATION: char = '=';

/// Prefix of every variable name, followed by a number counting from 1.
pub const VARIABLE_PREFIX: char = 'x';
