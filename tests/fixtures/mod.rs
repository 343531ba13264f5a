// Test fixtures - reusable test data
// Provides consistent instants and templates across all test files

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Timelike, Utc};
use date_template::{DateTemplate, Digits, HourCycle, MonthStyle, YearStyle};

/// Sample instants for testing (all UTC)
pub mod dates {
    use super::*;

    /// Jan 1, 2025 at midnight
    pub fn jan_1_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    /// Feb 14, 2025 at 14:00
    pub fn valentine_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 14, 14, 0, 0).unwrap()
    }

    /// Dec 31, 2025 at 23:59:58.250
    pub fn new_years_eve_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 58)
            .unwrap()
            .with_nanosecond(250_000_000)
            .unwrap()
    }

    /// Feb 29, 2024 at noon (leap year)
    pub fn leap_day_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()
    }
}

/// Commonly built templates
pub mod templates {
    use super::*;

    /// `yyyy-MM-dd`
    pub fn iso_date() -> DateTemplate {
        DateTemplate::new()
            .year(YearStyle::Full)
            .month(MonthStyle::Short)
            .day(Digits::Two)
    }

    /// `hh:mm a`
    pub fn clock_12h() -> DateTemplate {
        DateTemplate::new()
            .hours(HourCycle::Twelve)
            .minutes(Digits::Two)
            .period()
    }
}
