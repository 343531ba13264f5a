// Template pieces
// One serialisable builder call, so templates can live in configuration files

use serde::{Deserialize, Serialize};

use super::DateTemplate;
use crate::models::style::{
    DateSeparator, DateTimeSeparator, DayStyle, HourCycle, MinuteStyle, MonthStyle, QuarterStyle,
    SecondStyle, TimeSeparator, WeekdayStyle, YearStyle,
};

/// A single builder call.
///
/// Serialised as `{ field = "year", value = "full" }`; calls without an
/// argument omit `value` (`{ field = "period" }`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum Piece {
    Year(YearStyle),
    Quarter(QuarterStyle),
    Month(MonthStyle),
    Day(DayStyle),
    Weekday(WeekdayStyle),
    Hours(HourCycle),
    Minutes(MinuteStyle),
    Seconds(SecondStyle),
    FractionalSeconds(usize),
    TimeZone,
    TimeZoneName,
    Period,
    /// Hours and minutes; `true` adds milliseconds
    Time(bool),
    DateSeparator(DateSeparator),
    TimeSeparator(TimeSeparator),
    DateTimeSeparator(DateTimeSeparator),
}

impl Piece {
    /// Apply this call to `template`, returning the extended template
    pub fn apply(&self, template: &DateTemplate) -> DateTemplate {
        match *self {
            Piece::Year(style) => template.year(style),
            Piece::Quarter(style) => template.quarter(style),
            Piece::Month(style) => template.month(style),
            Piece::Day(style) => template.day(style),
            Piece::Weekday(style) => template.weekday(style),
            Piece::Hours(cycle) => template.hours(cycle),
            Piece::Minutes(style) => template.minutes(style),
            Piece::Seconds(style) => template.seconds(style),
            Piece::FractionalSeconds(length) => template.fractional_seconds(length),
            Piece::TimeZone => template.time_zone(),
            Piece::TimeZoneName => template.time_zone_name(),
            Piece::Period => template.period(),
            Piece::Time(fraction) => template.time(fraction),
            Piece::DateSeparator(separator) => template.date_separator(separator),
            Piece::TimeSeparator(separator) => template.time_separator(separator),
            Piece::DateTimeSeparator(separator) => template.date_time_separator(separator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::style::Digits;

    #[test]
    fn test_pieces_replay_builder_calls() {
        let pieces = [
            Piece::Year(YearStyle::Short),
            Piece::Month(MonthStyle::Numeric),
            Piece::Hours(HourCycle::Twelve),
            Piece::Period,
        ];
        let built = DateTemplate::new()
            .year(YearStyle::Short)
            .month(MonthStyle::Numeric)
            .hours(HourCycle::Twelve)
            .period();
        assert_eq!(DateTemplate::from_pieces(&pieces), built);
    }

    #[test]
    fn test_pieces_from_toml() {
        #[derive(Deserialize)]
        struct Doc {
            template: Vec<Piece>,
        }

        let doc: Doc = toml::from_str(
            r#"
            [[template]]
            field = "day"
            value = "two"

            [[template]]
            field = "month"
            value = "medium"

            [[template]]
            field = "date_separator"
            value = "space"

            [[template]]
            field = "time_zone"
            "#,
        )
        .unwrap();

        assert_eq!(
            doc.template,
            vec![
                Piece::Day(Digits::Two),
                Piece::Month(MonthStyle::Medium),
                Piece::DateSeparator(DateSeparator::Space),
                Piece::TimeZone,
            ]
        );
        assert_eq!(DateTemplate::from_pieces(&doc.template).template(), "dd MMM, z");
    }
}
