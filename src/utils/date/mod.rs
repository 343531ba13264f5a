// Date utility functions

use chrono::Datelike;

/// Quarter of the year (1-4) containing `date`
pub fn quarter_of<D: Datelike>(date: &D) -> u32 {
    date.month0() / 3 + 1
}

/// English ordinal for small numbers: 1st, 2nd, 3rd, 4th, 11th, 21st...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// First `digits` digits of a nanosecond fraction, zero-padded past nanosecond precision.
/// Leap-second nanos (>= 1e9) are clamped.
pub fn fraction_digits(nanos: u32, digits: usize) -> String {
    let nanos = nanos.min(999_999_999);
    let mut text = format!("{nanos:09}");
    if digits <= text.len() {
        text.truncate(digits);
    } else {
        text.extend(std::iter::repeat('0').take(digits - 9));
    }
    text
}
