/// Country calling code, also the trunk prefix stripped from typed input
pub const COUNTRY_CODE: &str = "998";

/// Operator code plus subscriber number
pub const SUBSCRIBER_LEN: usize = 9;

fn digits_of(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Significant digits after the country code, capped to the plan length
fn subscriber_digits(raw: &str) -> String {
    let digits = digits_of(raw);
    let significant = digits.strip_prefix(COUNTRY_CODE).unwrap_or(&digits);
    significant.chars().take(SUBSCRIBER_LEN).collect()
}

/// Format as `+998 (XX) XXX-XX-XX`, only as far as digits exist.
///
/// Punctuation after a group (`)` or `-`) appears once that group is
/// complete; the space after `)` appears with the first subscriber digit.
pub fn format_phone(raw: &str) -> String {
    if digits_of(raw).is_empty() {
        return String::new();
    }

    let subscriber = subscriber_digits(raw);
    let s = subscriber.as_str();
    let n = s.len();

    let mut out = format!("+{COUNTRY_CODE}");
    if n > 0 {
        out.push_str(" (");
        out.push_str(&s[..n.min(2)]);
    }
    if n >= 2 {
        out.push(')');
    }
    if n > 2 {
        out.push(' ');
        out.push_str(&s[2..n.min(5)]);
    }
    if n >= 5 {
        out.push('-');
        out.push_str(&s[5..n.min(7)]);
    }
    if n >= 7 {
        out.push('-');
        out.push_str(&s[7..n]);
    }

    out
}

/// Reformat an input after an edit, keeping deletions effective.
///
/// Deleting punctuation alone would be undone by reformatting, so a
/// deletion that leaves the formatted text unchanged drops the last digit.
/// Deleting into the country code clears the field.
pub fn apply_edit(previous: &str, raw: &str) -> String {
    let deleting = raw.chars().count() < previous.chars().count();
    if !deleting {
        return format_phone(raw);
    }

    let digits = digits_of(raw);
    if digits.len() <= COUNTRY_CODE.len() && COUNTRY_CODE.starts_with(digits.as_str()) {
        return String::new();
    }

    let formatted = format_phone(raw);
    if formatted != previous {
        return formatted;
    }

    let mut subscriber = subscriber_digits(raw);
    subscriber.pop();
    if subscriber.is_empty() {
        String::new()
    } else {
        format_phone(&format!("{COUNTRY_CODE}{subscriber}"))
    }
}

/// Digits to send to the API (`998XXXXXXXXX`), empty when nothing was entered
pub fn phone_digits(display: &str) -> String {
    let subscriber = subscriber_digits(display);
    if subscriber.is_empty() {
        String::new()
    } else {
        format!("{COUNTRY_CODE}{subscriber}")
    }
}

/// Whether all subscriber digits are present
pub fn is_complete(display: &str) -> bool {
    subscriber_digits(display).len() == SUBSCRIBER_LEN
}
