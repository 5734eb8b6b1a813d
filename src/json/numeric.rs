//! Legacy numeric-string detection.
//!
//! The legacy encoder emitted any scalar whose text "looks like a number"
//! without quotes. This module reproduces that test and the integer coercion
//! the date helpers rely on.

/// Whitespace accepted around a numeric string.
fn is_numeric_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Returns true if `text` is a numeric string.
///
/// Accepted form: optional surrounding whitespace, optional sign, then
/// `digits[.digits]`, `digits.` or `.digits`, then an optional exponent.
/// Hex, `inf`, `nan` and the empty string are rejected.
pub fn is_numeric(text: &str) -> bool {
    numeric_span(text).is_some()
}

/// Returns the byte range of the numeric body (whitespace trimmed).
fn numeric_span(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() && is_numeric_space(bytes[pos]) {
        pos += 1;
    }
    let start = pos;

    if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = pos - int_start;

    let mut frac_digits = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        let frac_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        frac_digits = pos - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp = pos + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        // A dangling exponent marker makes the whole string non-numeric.
        if exp == exp_start {
            return None;
        }
        pos = exp;
    }
    let end = pos;

    while pos < bytes.len() && is_numeric_space(bytes[pos]) {
        pos += 1;
    }

    if pos == bytes.len() {
        Some((start, end))
    } else {
        None
    }
}

/// Parse a numeric string into its floating-point value.
pub fn numeric_value(text: &str) -> Option<f64> {
    let (start, end) = numeric_span(text)?;
    text[start..end].parse::<f64>().ok()
}

/// Integer coercion of a numeric string (truncates toward zero).
pub fn to_int(text: &str) -> Option<i64> {
    let value = numeric_value(text)?;
    if !value.is_finite() || value < i64::MIN as f64 || value > i64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert!(is_numeric("0"));
        assert!(is_numeric("42"));
        assert!(is_numeric("-17"));
        assert!(is_numeric("+3"));
        assert!(is_numeric("007"));
    }

    #[test]
    fn test_fractions_and_exponents() {
        assert!(is_numeric("1.5"));
        assert!(is_numeric(".5"));
        assert!(is_numeric("5."));
        assert!(is_numeric("1e10"));
        assert!(is_numeric("-2.5E-3"));
        assert!(!is_numeric("1e"));
        assert!(!is_numeric("1e+"));
        assert!(!is_numeric("."));
    }

    #[test]
    fn test_whitespace() {
        assert!(is_numeric(" 12"));
        assert!(is_numeric("12 "));
        assert!(is_numeric("\t12\n"));
        assert!(!is_numeric("1 2"));
        assert!(!is_numeric("   "));
    }

    #[test]
    fn test_rejected_forms() {
        assert!(!is_numeric(""));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric("0x1A"));
        assert!(!is_numeric("inf"));
        assert!(!is_numeric("NaN"));
        assert!(!is_numeric("12abc"));
        assert!(!is_numeric("--1"));
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(numeric_value("42"), Some(42.0));
        assert_eq!(numeric_value(" -1.5 "), Some(-1.5));
        assert_eq!(numeric_value("5."), Some(5.0));
        assert_eq!(numeric_value(".25"), Some(0.25));
        assert_eq!(numeric_value("x"), None);
    }

    #[test]
    fn test_to_int_truncates() {
        assert_eq!(to_int("7"), Some(7));
        assert_eq!(to_int("7.9"), Some(7));
        assert_eq!(to_int("-7.9"), Some(-7));
        assert_eq!(to_int("1e1"), Some(10));
        assert_eq!(to_int("seven"), None);
    }
}
