// Style module
// Closed sets of field styles and separators accepted by the template builder

use serde::{Deserialize, Serialize};

/// How the year is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearStyle {
    /// Two digits (`yy`)
    Short,
    /// Full year (`yyyy`)
    Full,
}

impl YearStyle {
    pub fn symbol(&self) -> &'static str {
        match self {
            YearStyle::Short => "yy",
            YearStyle::Full => "yyyy",
        }
    }
}

/// How the quarter of the year is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuarterStyle {
    /// `1`
    Numeric,
    /// `Q1`
    Short,
    /// `1st quarter`
    Full,
}

impl QuarterStyle {
    pub fn symbol(&self) -> &'static str {
        match self {
            QuarterStyle::Numeric => "Q",
            QuarterStyle::Short => "QQQ",
            QuarterStyle::Full => "QQQQ",
        }
    }
}

/// How the month is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthStyle {
    /// `9`
    Numeric,
    /// `09`
    Short,
    /// `Sep`
    Medium,
    /// `September`
    Full,
    /// `S`
    Narrow,
}

impl MonthStyle {
    pub fn symbol(&self) -> &'static str {
        match self {
            MonthStyle::Numeric => "M",
            MonthStyle::Short => "MM",
            MonthStyle::Medium => "MMM",
            MonthStyle::Full => "MMMM",
            MonthStyle::Narrow => "MMMMM",
        }
    }
}

/// Number of digits for a numeric field (day, minutes, seconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Digits {
    /// No padding
    One,
    /// Zero-padded to two digits
    Two,
}

impl Digits {
    fn repeat(&self, letter: &'static str, double: &'static str) -> &'static str {
        match self {
            Digits::One => letter,
            Digits::Two => double,
        }
    }
}

/// Day of the month
pub type DayStyle = Digits;
/// Minutes of the hour
pub type MinuteStyle = Digits;
/// Seconds of the minute
pub type SecondStyle = Digits;

pub(crate) fn day_symbol(style: DayStyle) -> &'static str {
    style.repeat("d", "dd")
}

pub(crate) fn minute_symbol(style: MinuteStyle) -> &'static str {
    style.repeat("m", "mm")
}

pub(crate) fn second_symbol(style: SecondStyle) -> &'static str {
    style.repeat("s", "ss")
}

/// How the day of the week is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekdayStyle {
    /// `Tue`
    Short,
    /// `Tuesday`
    Full,
    /// `T`
    Narrow,
}

impl WeekdayStyle {
    pub fn symbol(&self) -> &'static str {
        match self {
            WeekdayStyle::Short => "E",
            WeekdayStyle::Full => "EEEE",
            WeekdayStyle::Narrow => "EEEEE",
        }
    }
}

/// Clock used for the hour field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourCycle {
    /// 01-12, usually paired with a period marker
    Twelve,
    /// 00-23
    TwentyFour,
}

impl HourCycle {
    pub fn symbol(&self) -> &'static str {
        match self {
            HourCycle::Twelve => "hh",
            HourCycle::TwentyFour => "HH",
        }
    }
}

/// Separator placed between date fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSeparator {
    #[default]
    Dash,
    Slash,
    Space,
}

impl DateSeparator {
    /// Characters of every date separator literal
    pub const CHARACTERS: [char; 3] = ['-', '/', ' '];

    pub fn literal(&self) -> &'static str {
        match self {
            DateSeparator::Dash => "-",
            DateSeparator::Slash => "/",
            DateSeparator::Space => " ",
        }
    }
}

/// Separator placed between time fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSeparator {
    #[default]
    Colon,
    Dot,
    Space,
}

impl TimeSeparator {
    /// Characters of every time separator literal
    pub const CHARACTERS: [char; 3] = [':', '.', ' '];

    pub fn literal(&self) -> &'static str {
        match self {
            TimeSeparator::Colon => ":",
            TimeSeparator::Dot => ".",
            TimeSeparator::Space => " ",
        }
    }
}

/// Connector placed between the date part and the time part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateTimeSeparator {
    #[default]
    CommaSpace,
    Space,
    /// ISO 8601 `T`, quoted so pattern engines read it as text
    IsoT,
}

impl DateTimeSeparator {
    pub fn literal(&self) -> &'static str {
        match self {
            DateTimeSeparator::CommaSpace => ", ",
            DateTimeSeparator::Space => " ",
            DateTimeSeparator::IsoT => "'T'",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(MonthStyle::Numeric, "M")]
    #[test_case(MonthStyle::Short, "MM")]
    #[test_case(MonthStyle::Medium, "MMM")]
    #[test_case(MonthStyle::Full, "MMMM")]
    #[test_case(MonthStyle::Narrow, "MMMMM")]
    fn test_month_symbols(style: MonthStyle, expected: &str) {
        assert_eq!(style.symbol(), expected);
    }

    #[test_case(Digits::One, "d", "m", "s")]
    #[test_case(Digits::Two, "dd", "mm", "ss")]
    fn test_digit_symbols(style: Digits, day: &str, minute: &str, second: &str) {
        assert_eq!(day_symbol(style), day);
        assert_eq!(minute_symbol(style), minute);
        assert_eq!(second_symbol(style), second);
    }

    #[test]
    fn test_default_separators() {
        assert_eq!(DateSeparator::default().literal(), "-");
        assert_eq!(TimeSeparator::default().literal(), ":");
        assert_eq!(DateTimeSeparator::default().literal(), ", ");
    }

    #[test]
    fn test_separator_characters_cover_every_literal() {
        for sep in [DateSeparator::Dash, DateSeparator::Slash, DateSeparator::Space] {
            assert!(sep.literal().chars().all(|c| DateSeparator::CHARACTERS.contains(&c)));
        }
        for sep in [TimeSeparator::Colon, TimeSeparator::Dot, TimeSeparator::Space] {
            assert!(sep.literal().chars().all(|c| TimeSeparator::CHARACTERS.contains(&c)));
        }
    }

    #[test]
    fn test_iso_connector_is_quoted() {
        assert_eq!(DateTimeSeparator::IsoT.literal(), "'T'");
    }
}
