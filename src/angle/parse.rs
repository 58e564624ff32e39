//! Parsing of `"<degrees>d<minutes>"` strings.

use super::{DELIMITER, MINUTES_PER_DEGREE};
use crate::util::SexagesimalError;

/// Parses a sextant measurement into degrees.
///
/// The degree part must be a non-negative integer and the combined value
/// must lie strictly inside `(0, 90)`.
pub fn parse(text: &str) -> Result<f64, SexagesimalError> {
    let (negative, degrees) = split_and_parse(text)?;
    if negative {
        return Err(SexagesimalError::NegativeWhole);
    }
    if degrees <= 0.0 {
        return Err(SexagesimalError::TooSmall);
    }
    if degrees >= 90.0 {
        return Err(SexagesimalError::TooLarge);
    }
    Ok(degrees)
}

/// Parses a signed angle into degrees without any range check.
///
/// A leading `-` on the degree part negates the whole angle, so `"-10d30.0"`
/// is `-10.5`. Callers bound the result with their own domain.
pub fn parse_signed(text: &str) -> Result<f64, SexagesimalError> {
    let (negative, degrees) = split_and_parse(text)?;
    Ok(if negative { -degrees } else { degrees })
}

/// Splits on the delimiter and returns the sign and the unsigned magnitude.
fn split_and_parse(text: &str) -> Result<(bool, f64), SexagesimalError> {
    let delimiters = text.matches(DELIMITER).count();
    if delimiters != 1 {
        return Err(SexagesimalError::MalformedFormat { delimiters });
    }
    let Some((whole_text, minutes_text)) = text.split_once(DELIMITER) else {
        return Err(SexagesimalError::MalformedFormat { delimiters });
    };

    let whole = parse_finite(whole_text)?;
    let negative = whole_text.starts_with('-');
    let magnitude_text = whole_text.trim_start_matches(['-', '+']);
    if magnitude_text.is_empty() || !magnitude_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SexagesimalError::NonIntegerWhole);
    }

    let minutes = parse_finite(minutes_text)?;
    if minutes < 0.0 {
        return Err(SexagesimalError::NegativeMinutes);
    }
    if minutes >= MINUTES_PER_DEGREE {
        return Err(SexagesimalError::MinutesOutOfRange);
    }

    Ok((negative, whole.abs() + minutes / MINUTES_PER_DEGREE))
}

fn parse_finite(part: &str) -> Result<f64, SexagesimalError> {
    match part.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SexagesimalError::InvalidNumber {
            part: part.to_string(),
        }),
    }
}
