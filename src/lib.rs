// Date Template Library
// Composable date/time format templates and a renderer for them

pub mod models;
pub mod services;
pub mod utils;

pub use models::settings::{Calendar, Config, RenderSettings};
pub use models::style::{
    DateSeparator, DateTimeSeparator, Digits, HourCycle, MonthStyle, QuarterStyle, TimeSeparator,
    WeekdayStyle, YearStyle,
};
pub use models::template::{DateTemplate, Piece};
pub use services::render::{render, RenderError, Renderer};
