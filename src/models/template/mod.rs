// Template module
// Immutable builder that assembles a date/time format template

mod piece;
mod sequence;

pub use piece::Piece;

use std::fmt;

use crate::models::style::{
    day_symbol, minute_symbol, second_symbol, DateSeparator, DateTimeSeparator, DayStyle, Digits,
    HourCycle, MinuteStyle, MonthStyle, QuarterStyle, SecondStyle, TimeSeparator, WeekdayStyle,
    YearStyle,
};
use sequence::Sequence;

/// Default number of fractional-second digits used by [`DateTemplate::time`]
pub const DEFAULT_FRACTION_DIGITS: usize = 3;

/// A date/time format template built from symbolic pieces.
///
/// Every builder method borrows `self` and returns a new template, so a
/// template can be shared and extended in several directions without being
/// altered.
///
/// # Examples
/// ```
/// use date_template::models::style::{Digits, MonthStyle, YearStyle, DateSeparator};
/// use date_template::models::template::DateTemplate;
///
/// let template = DateTemplate::new()
///     .year(YearStyle::Full)
///     .month(MonthStyle::Short)
///     .day(Digits::Two);
/// assert_eq!(template.template(), "yyyy-MM-dd");
/// assert_eq!(template.date_separator(DateSeparator::Slash).template(), "yyyy/MM/dd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTemplate {
    date: Sequence,
    time: Sequence,
    date_separator: DateSeparator,
    time_separator: TimeSeparator,
    date_time_separator: DateTimeSeparator,
    date_before_time: bool,
    template: String,
}

impl Default for DateTemplate {
    fn default() -> Self {
        Self {
            date: Sequence::default(),
            time: Sequence::default(),
            date_separator: DateSeparator::default(),
            time_separator: TimeSeparator::default(),
            date_time_separator: DateTimeSeparator::default(),
            date_before_time: true,
            template: String::new(),
        }
    }
}

impl DateTemplate {
    /// Create an empty template
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay a list of builder calls over an empty template
    pub fn from_pieces<'a>(pieces: impl IntoIterator<Item = &'a Piece>) -> Self {
        pieces
            .into_iter()
            .fold(Self::new(), |template, piece| piece.apply(&template))
    }

    /// The assembled template
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The date half on its own
    pub fn date_part(&self) -> &str {
        self.date.as_str()
    }

    /// The time half on its own
    pub fn time_part(&self) -> &str {
        self.time.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_empty() && self.time.is_empty()
    }

    /// Whether the date half comes first when both halves are present
    pub fn date_before_time(&self) -> bool {
        self.date_before_time
    }

    pub fn current_date_separator(&self) -> DateSeparator {
        self.date_separator
    }

    pub fn current_time_separator(&self) -> TimeSeparator {
        self.time_separator
    }

    pub fn current_date_time_separator(&self) -> DateTimeSeparator {
        self.date_time_separator
    }

    // Date fields

    pub fn year(&self, style: YearStyle) -> Self {
        self.push_date(style.symbol())
    }

    pub fn quarter(&self, style: QuarterStyle) -> Self {
        self.push_date(style.symbol())
    }

    pub fn month(&self, style: MonthStyle) -> Self {
        self.push_date(style.symbol())
    }

    pub fn day(&self, style: DayStyle) -> Self {
        self.push_date(day_symbol(style))
    }

    pub fn weekday(&self, style: WeekdayStyle) -> Self {
        self.push_date(style.symbol())
    }

    // Time fields

    pub fn hours(&self, cycle: HourCycle) -> Self {
        self.push_time(cycle.symbol())
    }

    pub fn minutes(&self, style: MinuteStyle) -> Self {
        self.push_time(minute_symbol(style))
    }

    pub fn seconds(&self, style: SecondStyle) -> Self {
        self.push_time(second_symbol(style))
    }

    /// Append `length` fraction digits. A length of zero leaves the template unchanged.
    pub fn fractional_seconds(&self, length: usize) -> Self {
        if length == 0 {
            return self.clone();
        }
        self.push_time(&"S".repeat(length))
    }

    /// Short time-zone name (`z`)
    pub fn time_zone(&self) -> Self {
        self.push_time("z")
    }

    /// Full time-zone name (`zzzz`)
    pub fn time_zone_name(&self) -> Self {
        self.push_time("zzzz")
    }

    /// AM/PM marker (`a`), set off from the clock by a space
    pub fn period(&self) -> Self {
        self.push_time_after(" ", "a")
    }

    /// 24-hour hours and two-digit minutes, optionally followed by milliseconds
    pub fn time(&self, include_fractional_seconds: bool) -> Self {
        let template = self
            .hours(HourCycle::TwentyFour)
            .minutes(Digits::Two);
        if include_fractional_seconds {
            template.fractional_seconds(DEFAULT_FRACTION_DIGITS)
        } else {
            template
        }
    }

    // Separators

    /// Use `separator` between date fields. Every separator character already
    /// in the date half is replaced as well.
    pub fn date_separator(&self, separator: DateSeparator) -> Self {
        Self {
            date: self
                .date
                .rewritten(&DateSeparator::CHARACTERS, separator.literal()),
            date_separator: separator,
            ..self.clone()
        }
        .refresh()
    }

    /// Use `separator` between time fields. Every separator character already
    /// in the time half is replaced as well, including the space before `a`.
    pub fn time_separator(&self, separator: TimeSeparator) -> Self {
        Self {
            time: self
                .time
                .rewritten(&TimeSeparator::CHARACTERS, separator.literal()),
            time_separator: separator,
            ..self.clone()
        }
        .refresh()
    }

    /// Use `separator` between the date half and the time half
    pub fn date_time_separator(&self, separator: DateTimeSeparator) -> Self {
        Self {
            date_time_separator: separator,
            ..self.clone()
        }
        .refresh()
    }

    fn push_date(&self, symbol: &str) -> Self {
        Self {
            date: self.date.with(self.date_separator.literal(), symbol),
            ..self.clone()
        }
        .refresh()
    }

    fn push_time(&self, symbol: &str) -> Self {
        self.push_time_after(self.time_separator.literal(), symbol)
    }

    fn push_time_after(&self, joint: &str, symbol: &str) -> Self {
        // Ordering is settled by the first time symbol: time leads when no
        // date symbol has been written yet.
        let date_before_time = if self.time.is_empty() {
            !self.date.is_empty()
        } else {
            self.date_before_time
        };
        Self {
            time: self.time.with(joint, symbol),
            date_before_time,
            ..self.clone()
        }
        .refresh()
    }

    fn refresh(mut self) -> Self {
        self.template = assemble(
            self.date.as_str(),
            self.time.as_str(),
            self.date_time_separator.literal(),
            self.date_before_time,
        );
        self
    }
}

fn assemble(date: &str, time: &str, connector: &str, date_before_time: bool) -> String {
    match (date.is_empty(), time.is_empty()) {
        (true, true) => String::new(),
        (true, false) => time.to_string(),
        (false, true) => date.to_string(),
        (false, false) if date_before_time => format!("{date}{connector}{time}"),
        (false, false) => format!("{time}{connector}{date}"),
    }
}

impl fmt::Display for DateTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl AsRef<str> for DateTemplate {
    fn as_ref(&self) -> &str {
        &self.template
    }
}
