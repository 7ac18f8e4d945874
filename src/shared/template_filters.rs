// src/shared/template_filters.rs
//
// Numeric helpers used when shaping page contexts. Inputs arrive as loosely
// typed values (form strings, stored decimals); anything that does not parse
// to a finite number yields 0.0 instead of an error.

use std::fmt::Display;

pub const DEFAULT_PERCENTAGE_MAX: f64 = 10.0;

fn parse_number(value: impl Display) -> Option<f64> {
    value
        .to_string()
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// `value * arg`
pub fn multiply(value: impl Display, arg: impl Display) -> f64 {
    match (parse_number(value), parse_number(arg)) {
        (Some(a), Some(b)) => finite_or_zero(a * b),
        _ => 0.0,
    }
}

/// `value / max * 100`
pub fn to_percentage(value: impl Display, max: impl Display) -> f64 {
    let (Some(value), Some(max)) = (parse_number(value), parse_number(max)) else {
        return 0.0;
    };

    if max == 0.0 {
        return 0.0;
    }

    finite_or_zero(value / max * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_parses_strings_and_numbers() {
        assert_eq!(multiply("2.5", 4), 10.0);
        assert_eq!(multiply(3, "  2 "), 6.0);
    }

    #[test]
    fn multiply_malformed_input_is_zero() {
        assert_eq!(multiply("abc", 2), 0.0);
        assert_eq!(multiply(2, ""), 0.0);
        assert_eq!(multiply("NaN", 2), 0.0);
    }

    #[test]
    fn percentage_uses_given_max() {
        assert_eq!(to_percentage(8.5, DEFAULT_PERCENTAGE_MAX), 85.0);
        assert_eq!(to_percentage("50", "200"), 25.0);
    }

    #[test]
    fn percentage_zero_max_or_garbage_is_zero() {
        assert_eq!(to_percentage(5, 0), 0.0);
        assert_eq!(to_percentage("five", 10), 0.0);
        assert_eq!(to_percentage(5, "inf"), 0.0);
    }
}
