//! PHP-style date format matching.
//!
//! Nhanh documents its date fields with PHP format strings (`Y-m-d`,
//! `Y-m-d H:i:s`). A value matches when it parses under the format and
//! formats back to the identical text, which rejects inputs that a lenient
//! parser would normalize (`2024-02-30`, `2024-1-5`).

use chrono::format::{Parsed, StrftimeItems, parse};

/// Whether `value` matches the PHP-style `format` exactly.
#[must_use]
pub fn matches(value: &str, format: &str) -> bool {
    let pattern = to_strftime(format);
    let mut parsed = Parsed::new();
    if parse(&mut parsed, value, StrftimeItems::new(&pattern)).is_err() {
        return false;
    }

    let rendered = match (parsed.to_naive_date(), parsed.to_naive_time()) {
        (Ok(date), Ok(time)) => date.and_time(time).format(&pattern).to_string(),
        (Ok(date), Err(_)) => date.format(&pattern).to_string(),
        (Err(_), Ok(time)) => time.format(&pattern).to_string(),
        (Err(_), Err(_)) => return false,
    };

    rendered == value
}

/// Translate PHP date tokens into chrono's strftime syntax.
fn to_strftime(format: &str) -> String {
    let mut pattern = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        match c {
            'Y' => pattern.push_str("%Y"),
            'y' => pattern.push_str("%y"),
            'm' => pattern.push_str("%m"),
            'n' => pattern.push_str("%-m"),
            'd' => pattern.push_str("%d"),
            'j' => pattern.push_str("%-d"),
            'H' => pattern.push_str("%H"),
            'G' => pattern.push_str("%-H"),
            'i' => pattern.push_str("%M"),
            's' => pattern.push_str("%S"),
            '%' => pattern.push_str("%%"),
            '\\' => {
                if let Some(escaped) = chars.next() {
                    push_literal(&mut pattern, escaped);
                }
            }
            other => push_literal(&mut pattern, other),
        }
    }
    pattern
}

fn push_literal(pattern: &mut String, c: char) {
    if c == '%' {
        pattern.push_str("%%");
    } else {
        pattern.push(c);
    }
}
