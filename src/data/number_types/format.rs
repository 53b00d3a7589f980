//! # Displaying numbers
//!
//! Every value shown to the user goes through `smart_format`, such that golden outputs are
//! reproducible.

/// Values with a magnitude below this are treated as zero when deciding what to show.
pub const EPSILON: f64 = 1e-6;

/// Scale at which values are rounded: four decimals.
const ROUNDING_SCALE: f64 = 1e4;

/// Format a value: integers without decimal point, other values rounded to four decimals.
///
/// Ties at the fourth decimal are rounded to even. Trailing zeros are never shown, so `2.5` stays
/// `"2.5"`, and a value that rounds to zero is shown as `"0"`, never as `"-0"`.
///
/// # Arguments
///
/// * `value`: Any float, non-finite values are shown as Rust displays them.
///
/// # Return value
///
/// Shortest decimal text of the rounded value.
pub fn smart_format(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = if value.fract() == 0f64 {
        value
    } else {
        (value * ROUNDING_SCALE).round_ties_even() / ROUNDING_SCALE
    };

    // Adding a positive zero turns -0 into 0
    (rounded + 0f64).to_string()
}
