//! Height text conversion (`6'8"` -> 80 inches).
//!
//! # Invariants
//! - Accepted shape is exactly `<feet>'<inches>"`.
//! - Both numbers are finite unsigned decimals; exponents, signs and padding are rejected.
//! - Invalid input always converts to `0.0` inches.

use once_cell::sync::Lazy;
use regex::Regex;

const FEET_MARK: char = '\'';
const INCHES_MARK: char = '"';
const INCHES_PER_FOOT: f64 = 12.0;

static UNSIGNED_DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("valid decimal regex")
});

/// Result of converting height text into inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightConversion {
    pub is_valid: bool,
    pub height_in_inches: f64,
}

impl HeightConversion {
    const INVALID: Self = Self {
        is_valid: false,
        height_in_inches: 0.0,
    };

    fn valid(height_in_inches: f64) -> Self {
        Self {
            is_valid: true,
            height_in_inches,
        }
    }
}

/// Converts `<feet>'<inches>"` text into total inches.
///
/// Inches above 11 are not normalized: `5'14"` converts to 74.
pub fn convert_height_text_to_inches(text: &str) -> HeightConversion {
    let mut parts = text.split(FEET_MARK);
    let (Some(feet_text), Some(inches_part), None) = (parts.next(), parts.next(), parts.next())
    else {
        return HeightConversion::INVALID;
    };

    let Some(inches_text) = inches_part.strip_suffix(INCHES_MARK) else {
        return HeightConversion::INVALID;
    };

    match (parse_unsigned(feet_text), parse_unsigned(inches_text)) {
        (Some(feet), Some(inches)) => HeightConversion::valid(feet * INCHES_PER_FOOT + inches),
        _ => HeightConversion::INVALID,
    }
}

fn parse_unsigned(text: &str) -> Option<f64> {
    if !UNSIGNED_DECIMAL_RE.is_match(text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
