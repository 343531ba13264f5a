// Field rendering
// Turns one pattern field into text for a zoned instant

use chrono::{DateTime, Datelike, Locale, Timelike};
use chrono_tz::Tz;

use super::RenderError;
use crate::utils::date::{fraction_digits, ordinal, quarter_of};

/// Append the text for `letter` repeated `width` times to `out`.
/// `position` is where the field starts in the pattern, for error reporting.
pub(super) fn write_field(
    out: &mut String,
    letter: char,
    width: usize,
    position: usize,
    dt: &DateTime<Tz>,
    locale: Locale,
) -> Result<(), RenderError> {
    match letter {
        'y' if width == 2 => out.push_str(&padded(dt.year().rem_euclid(100), 2)),
        'y' => out.push_str(&padded(dt.year(), width)),
        'Q' => {
            let quarter = quarter_of(dt);
            match width {
                1 | 2 => out.push_str(&padded(quarter, width)),
                3 => out.push_str(&format!("Q{quarter}")),
                _ => out.push_str(&format!("{} quarter", ordinal(quarter))),
            }
        }
        'M' => match width {
            1 | 2 => out.push_str(&padded(dt.month(), width)),
            3 => out.push_str(&localized(dt, "%b", locale)),
            4 => out.push_str(&localized(dt, "%B", locale)),
            _ => out.push_str(&narrow(&localized(dt, "%B", locale))),
        },
        'd' => out.push_str(&padded(dt.day(), width.min(2))),
        'E' => match width {
            1..=3 => out.push_str(&localized(dt, "%a", locale)),
            4 => out.push_str(&localized(dt, "%A", locale)),
            _ => out.push_str(&narrow(&localized(dt, "%A", locale))),
        },
        'h' => out.push_str(&padded(dt.hour12().1, width.min(2))),
        'H' => out.push_str(&padded(dt.hour(), width.min(2))),
        'm' => out.push_str(&padded(dt.minute(), width.min(2))),
        's' => out.push_str(&padded(dt.second(), width.min(2))),
        'S' => out.push_str(&fraction_digits(dt.nanosecond(), width)),
        'z' if width >= 4 => out.push_str(dt.timezone().name()),
        'z' => out.push_str(&dt.format("%Z").to_string()),
        'a' => out.push_str(&localized(dt, "%p", locale)),
        _ => return Err(RenderError::UnknownField { letter, position }),
    }
    Ok(())
}

fn padded<N: std::fmt::Display>(value: N, width: usize) -> String {
    format!("{value:0width$}")
}

fn localized(dt: &DateTime<Tz>, specifier: &str, locale: Locale) -> String {
    dt.format_localized(specifier, locale).to_string()
}

/// First letter of a name, upper-cased
fn narrow(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
