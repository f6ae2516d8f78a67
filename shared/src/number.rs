use thiserror::Error;

/// Inserted between integer digit triples
pub const GROUP_SEPARATOR: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("no number entered")]
    Empty,
    #[error("{0:?} is not a decimal number")]
    Malformed(String),
}

/// An accepted edit of an amount field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberEdit {
    /// Grouped text for the input element
    pub display: String,
    /// Separator-free numeric string for the form state
    pub value: String,
}

/// Keep digits and the first decimal point; digits after later dots join the fraction
pub fn clean(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut seen_dot = false;

    for c in input.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            out.push(c);
        }
    }

    out
}

/// Group the integer part of a cleaned number in triples.
///
/// A trailing dot survives so "1234." can still be typed into. An empty
/// integer part only becomes "0" once fraction digits exist.
pub fn group(digits_and_dot: &str) -> String {
    let (integer, fraction) = match digits_and_dot.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits_and_dot, None),
    };

    let integer = if integer.is_empty() && fraction.is_some_and(|f| !f.is_empty()) {
        "0"
    } else {
        integer
    };

    let len = integer.chars().count();
    let mut out = String::with_capacity(digits_and_dot.len() + len / 3 + 1);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }

    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }

    out
}

/// Strip group separators (any whitespace, so thin and no-break spaces too)
pub fn to_numeric_string(display: &str) -> String {
    display.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Keystroke gate: digits, optionally a dot, optionally more digits
pub fn is_acceptable(candidate: &str) -> bool {
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    match candidate.split_once('.') {
        Some((integer, fraction)) => all_digits(integer) && all_digits(fraction),
        None => all_digits(candidate),
    }
}

/// Parse a display string. "12." and "." are accepted as in-progress values.
pub fn to_number(display: &str) -> Result<f64, NumberError> {
    let numeric = to_numeric_string(display);
    if numeric.is_empty() {
        return Err(NumberError::Empty);
    }
    if !is_acceptable(&numeric) {
        return Err(NumberError::Malformed(numeric));
    }

    let (integer, fraction) = numeric.split_once('.').unwrap_or((numeric.as_str(), ""));
    let integer = if integer.is_empty() { "0" } else { integer };
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    format!("{integer}.{fraction}")
        .parse::<f64>()
        .map_err(|_| NumberError::Malformed(numeric.clone()))
}

/// The value to send to the API: at least one integer digit, no dangling dot
pub fn to_submission(display: &str) -> Result<String, NumberError> {
    let numeric = to_numeric_string(display);
    if numeric.is_empty() {
        return Err(NumberError::Empty);
    }
    if !is_acceptable(&numeric) {
        return Err(NumberError::Malformed(numeric));
    }

    match numeric.split_once('.') {
        Some(("", _)) => Err(NumberError::Malformed(numeric)),
        Some((integer, "")) => Ok(integer.to_string()),
        Some(_) | None => Ok(numeric),
    }
}

/// Apply one edit of an amount input.
///
/// Returns `None` when the text (separators aside) holds anything other than
/// digits and dots; the caller keeps its previous value in that case.
pub fn accept_keystroke(raw: &str) -> Option<NumberEdit> {
    let candidate = to_numeric_string(raw);
    if !candidate.chars().all(|c| c.is_ascii_digit() || c == '.') {
        tracing::debug!(input = %raw, "amount keystroke rejected");
        return None;
    }

    let cleaned = clean(&candidate);
    if !is_acceptable(&cleaned) {
        return None;
    }

    let display = group(&cleaned);
    let value = to_numeric_string(&display);
    Some(NumberEdit { display, value })
}

/// Render an API amount for tables: grouped, at most two fraction digits
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let rendered = format!("{:.2}", value.abs());
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    let grouped = group(trimmed);

    if value < 0.0 && grouped != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_keeps_first_dot() {
        assert_eq!(clean("1234567.8"), "1234567.8");
        assert_eq!(clean("1.2.3"), "1.23");
        assert_eq!(clean("$ 1,000.50 so'm"), "1000.50");
        assert_eq!(clean("abc"), "");
        assert_eq!(clean(".."), ".");
    }

    #[test]
    fn test_group_inserts_separators() {
        assert_eq!(group(&clean("1234567.8")), "1 234 567.8");
        assert_eq!(group(&clean("1.2.3")), "1.23");
        assert_eq!(group("100"), "100");
        assert_eq!(group("1000"), "1 000");
        assert_eq!(group("123456"), "123 456");
        assert_eq!(group(""), "");
    }

    #[test]
    fn test_group_transitional_states() {
        assert_eq!(group("1234."), "1 234.");
        assert_eq!(group("."), ".");
        assert_eq!(group(".5"), "0.5");
        assert_eq!(group("0."), "0.");
    }

    #[test]
    fn test_to_number_accepts_in_progress_values() {
        assert_eq!(to_number("1 234."), Ok(1234.0));
        assert_eq!(to_number("."), Ok(0.0));
        assert_eq!(to_number("0.5"), Ok(0.5));
        assert_eq!(to_number(""), Err(NumberError::Empty));
        assert!(matches!(to_number("1a"), Err(NumberError::Malformed(_))));
        assert!(matches!(to_number("1.2.3"), Err(NumberError::Malformed(_))));
    }

    #[test]
    fn test_formatted_value_matches_cleaned_value() {
        let cases = [
            ("1234567.8", 1234567.8),
            ("1.2.3", 1.23),
            ("x9y8z7.", 987.0),
            ("..42", 0.42),
            ("000123", 123.0),
            ("12 345 678 901.25", 12345678901.25),
        ];

        for (input, expected) in cases {
            let cleaned = clean(input);
            assert_eq!(to_number(&group(&cleaned)), Ok(expected), "input {input:?}");
            assert_eq!(to_number(&cleaned), Ok(expected), "input {input:?}");
        }
    }

    #[test]
    fn test_separator_strip_reproduces_numeric_string() {
        for numeric in ["1", "12", "1234", "1234567.891", "1234.", "0.5", "99999999999999999999.1"] {
            assert_eq!(to_numeric_string(&group(numeric)), numeric);
        }
    }

    #[test]
    fn test_keystroke_gate() {
        assert!(is_acceptable(""));
        assert!(is_acceptable("12"));
        assert!(is_acceptable("12."));
        assert!(is_acceptable(".5"));
        assert!(!is_acceptable("1.2.3"));
        assert!(!is_acceptable("1e5"));
        assert!(!is_acceptable("-1"));
    }

    #[test]
    fn test_accept_keystroke() {
        let edit = accept_keystroke("1 2345").unwrap();
        assert_eq!(edit.display, "12 345");
        assert_eq!(edit.value, "12345");

        let edit = accept_keystroke("1 234.").unwrap();
        assert_eq!(edit.display, "1 234.");
        assert_eq!(edit.value, "1234.");

        let edit = accept_keystroke("1.2.").unwrap();
        assert_eq!(edit.display, "1.2");

        assert_eq!(accept_keystroke("12a"), None);
        assert_eq!(accept_keystroke("-5"), None);
        assert_eq!(accept_keystroke("").map(|e| e.display), Some(String::new()));
    }

    #[test]
    fn test_submission_value() {
        assert_eq!(to_submission("1 234."), Ok("1234".to_string()));
        assert_eq!(to_submission("1 234.50"), Ok("1234.50".to_string()));
        assert_eq!(to_submission(""), Err(NumberError::Empty));
        assert!(to_submission(".").is_err());
        assert!(to_submission(".5").is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1500000.0), "1 500 000");
        assert_eq!(format_amount(1234.5), "1 234.5");
        assert_eq!(format_amount(0.129), "0.13");
        assert_eq!(format_amount(-2500.0), "-2 500");
        assert_eq!(format_amount(-0.001), "0");
        assert_eq!(format_amount(f64::NAN), "");
    }
}
