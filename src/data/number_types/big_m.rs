//! # Big-M values
//!
//! Artificial variables are penalized in the cost function with a symbolic constant `M` that is
//! larger than any other number. Values are tracked as a real part plus a multiple of `M` until
//! the `M` part cancels.
use std::fmt;
use std::ops::{Add, Neg};

use num_traits::Zero;
use serde::Serialize;

use crate::data::number_types::format::{EPSILON, smart_format};

/// The symbol used for the large constant in coefficient terms.
pub const M_SYMBOL: char = 'M';

/// A value `real + m * M`.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize)]
pub struct BigM {
    /// Part without `M`.
    pub real: f64,
    /// Multiplier of `M`.
    pub m: f64,
}

impl BigM {
    /// Create a new value from its two parts.
    pub fn new(real: f64, m: f64) -> Self {
        Self { real, m }
    }

    /// Split a coefficient term such as `"2"`, `"M"`, `"-M"` or `"3M"` into its parts.
    ///
    /// Terms in the input notations are never mixed: a term either has an `M` or it doesn't. A
    /// term without `M` is read as the real part. Otherwise, the `M` is removed and what remains
    /// is read as the multiplier, where an empty remainder or a lone sign means a magnitude of
    /// one.
    ///
    /// # Return value
    ///
    /// Unreadable numbers are read as zero.
    pub fn from_term(term: &str) -> Self {
        let term = term.trim();

        if !term.contains(M_SYMBOL) {
            return Self::new(term.parse().unwrap_or(0f64), 0f64);
        }

        let multiplier = match term.replacen(M_SYMBOL, "", 1).trim() {
            "" | "+" => 1f64,
            "-" => -1f64,
            remainder => remainder.parse().unwrap_or(0f64),
        };

        Self::new(0f64, multiplier)
    }

    /// Whether the `M` part is negligible.
    pub fn is_real(&self) -> bool {
        self.m.abs() < EPSILON
    }
}

impl Add for BigM {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.real + rhs.real, self.m + rhs.m)
    }
}

impl Neg for BigM {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.m)
    }
}

impl Zero for BigM {
    fn zero() -> Self {
        Self::new(0f64, 0f64)
    }

    fn is_zero(&self) -> bool {
        self.real == 0f64 && self.m == 0f64
    }
}

/// Shows the value the way a reduced cost is written in a tableau.
///
/// Without an `M` part only the real part is shown. Otherwise the `M` part comes first (`"M"`,
/// `"-M"` or `"2.5M"`), followed by the real part with its sign written as an operator, if it is
/// not negligible: `"M - 3"`.
impl fmt::Display for BigM {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_real() {
            return f.write_str(&smart_format(self.real));
        }

        if self.m == 1f64 {
            f.write_str("M")?;
        } else if self.m == -1f64 {
            f.write_str("-M")?;
        } else {
            write!(f, "{}M", smart_format(self.m))?;
        }

        if self.real.abs() > EPSILON {
            let operator = if self.real > 0f64 { "+" } else { "-" };
            write!(f, " {} {}", operator, smart_format(self.real.abs()))?;
        }

        Ok(())
    }
}
