//! Display formatting helpers

use chrono::{Datelike, Timelike};
use humansize::{FormatSizeOptions, WINDOWS, format_size};

/// Formats a number with thousands separators and at most three decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value < 0.0 && rounded.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Formats a byte count in base 1024 (`KB`, `MB`, ...).
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    format_size(bytes, FormatSizeOptions::from(WINDOWS).decimal_places(2))
}

/// Coarse duration: seconds below a minute, minutes below an hour, hours otherwise.
pub fn format_time(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m", seconds / 60)
    } else {
        format!("{}h", seconds / 3600)
    }
}

/// Formats a date with the `YYYY MM DD HH mm ss` token language.
///
/// Any other character in `pattern` is copied verbatim.
pub fn format_date<D: Datelike + Timelike>(date: &D, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut rest = pattern;
    while !rest.is_empty() {
        let (token, len) = if rest.starts_with("YYYY") {
            (format!("{:04}", date.year()), 4)
        } else if rest.starts_with("MM") {
            (format!("{:02}", date.month()), 2)
        } else if rest.starts_with("DD") {
            (format!("{:02}", date.day()), 2)
        } else if rest.starts_with("HH") {
            (format!("{:02}", date.hour()), 2)
        } else if rest.starts_with("mm") {
            (format!("{:02}", date.minute()), 2)
        } else if rest.starts_with("ss") {
            (format!("{:02}", date.second()), 2)
        } else {
            let c = rest.chars().next().unwrap_or_default();
            (c.to_string(), c.len_utf8())
        };
        out.push_str(&token);
        rest = &rest[len..];
    }
    out
}
