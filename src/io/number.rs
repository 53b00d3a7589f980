//! # Number parsing
//!
//! Reading real numbers from tokens in the input notations.
use crate::io::Leniency;
use crate::io::error::{FileLocation, Parse as ParseError, ParseResult};

/// Read a real number from a token.
///
/// # Arguments
///
/// * `text`: The token, surrounding whitespace is ignored.
/// * `leniency`: When lenient, anything that isn't a number is read as NaN.
/// * `location`: Where the token was found, only evaluated when an error is created.
///
/// # Errors
///
/// When parsing strictly and the token is not a finite number.
pub(crate) fn parse_real(
    text: &str,
    leniency: Leniency,
    location: impl FnOnce() -> FileLocation,
) -> ParseResult<f64> {
    let text = text.trim();
    match (text.parse::<f64>(), leniency) {
        (Ok(value), Leniency::Lenient) => Ok(value),
        (Ok(value), Leniency::Strict) if value.is_finite() => Ok(value),
        (_, Leniency::Strict) => Err(ParseError::MalformedNumber {
            text: text.to_string(),
            location: location(),
        }),
        (Err(_), Leniency::Lenient) => {
            log::debug!("Token \"{}\" is not a number, reading it as NaN", text);
            Ok(f64::NAN)
        },
    }
}

#[cfg(test)]
mod test {
    use crate::io::Leniency;
    use crate::io::error::{FileLocation, Parse};
    use crate::io::number::parse_real;

    fn here() -> FileLocation {
        FileLocation::new(1, "b: 1, two")
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_real(" 4 ", Leniency::Strict, here), Ok(4f64));
        assert_eq!(parse_real("-1.5", Leniency::Lenient, here), Ok(-1.5));
        assert_eq!(parse_real("1e3", Leniency::Strict, here), Ok(1000f64));
    }

    #[test]
    fn lenient() {
        assert!(parse_real("two", Leniency::Lenient, here).unwrap().is_nan());
        assert!(parse_real("", Leniency::Lenient, here).unwrap().is_nan());
    }

    #[test]
    fn strict() {
        assert_eq!(
            parse_real("two", Leniency::Strict, here),
            Err(Parse::MalformedNumber { text: "two".to_string(), location: here() }),
        );
        assert!(parse_real("NaN", Leniency::Strict, here).is_err());
    }
}
