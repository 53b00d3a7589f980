//! # Reading linear programs
//!
//! This module provides read functionality for the textual notations in which linear programs are
//! written by hand, and the shapes in which they are exchanged with a solver.
use std::fs;
use std::path::Path;

use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::io::error::Import;

pub mod copt;
pub mod error;
pub mod grid;
pub mod standardized;
pub mod wire;

mod number;

/// How malformed input is treated.
///
/// The notations are read leniently by default: numbers that can't be read become NaN and
/// constraints without a relation are skipped. Strict parsing turns those cases into errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Leniency {
    /// Absorb malformed values.
    #[default]
    Lenient,
    /// Reject malformed values.
    Strict,
}

/// The textual notations that can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Line oriented `key: value` pairs, see `standardized`.
    Standardized,
    /// Algebraic `min ... subject to ... end` notation, see `copt`.
    Copt,
}

impl Format {
    /// Guess the notation from a file extension.
    ///
    /// `.lp` files are read as COPT, `.txt` and `.std` files in the standardized notation.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "lp" => Some(Format::Copt),
            "txt" | "std" => Some(Format::Standardized),
            _ => None,
        }
    }
}

/// Parse a linear program from text.
///
/// # Arguments
///
/// * `program`: Entire problem text.
/// * `format`: Notation the text is written in.
/// * `leniency`: Whether malformed values are absorbed or rejected.
///
/// # Errors
///
/// When required information is missing, or when the dimensions of what was read don't agree.
pub fn parse(program: &str, format: Format, leniency: Leniency) -> Result<CanonicalForm, Import> {
    match format {
        Format::Standardized => standardized::parse(program, leniency),
        Format::Copt => copt::parse(program, leniency),
    }
}

/// Import a problem from a file.
///
/// The `import` function takes a file path and returns, if successful, the linear program in
/// canonical form. When no `format` is given, it is derived from the file extension.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, there is an inconsistency in
/// the problem file, etc. an error type is returned.
pub fn import(
    file_path: &Path,
    format: Option<Format>,
    leniency: Leniency,
) -> Result<CanonicalForm, Import> {
    let format = match format {
        Some(format) => format,
        None => match file_path.extension() {
            Some(extension) => match extension.to_str() {
                Some(extension_string) => Format::from_extension(extension_string).ok_or_else(|| {
                    Import::FileExtension(format!(
                        "Could not recognise file extension \"{}\" of file: {:?}",
                        extension_string, file_path,
                    ))
                })?,
                None => return Err(Import::FileExtension(format!(
                    "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                    extension,
                ))),
            },
            None => return Err(Import::FileExtension(format!(
                "Could not read extension from file path: {:?}",
                file_path,
            ))),
        },
    };

    let program = fs::read_to_string(file_path)?;
    log::debug!("Read {} bytes from {:?}, parsing as {:?}", program.len(), file_path, format);

    parse(&program, format, leniency)
}
