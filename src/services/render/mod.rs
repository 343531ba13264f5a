// Render service
// Formats instants with a template built by the template builder

mod fields;
pub mod pattern;

use chrono::{DateTime, Locale, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::models::settings::{Calendar, RenderSettings};
use crate::services::settings::ConfigError;
use pattern::Token;

/// Why a template could not be rendered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Unknown pattern letter '{letter}' at position {position}")]
    UnknownField { letter: char, position: usize },

    #[error("Unterminated quoted text starting at position {position}")]
    UnterminatedQuote { position: usize },
}

/// Renders templates in a fixed time zone and locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    time_zone: Tz,
    locale: Locale,
    localized: bool,
    calendar: Calendar,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Tz::UTC, Locale::en_US, false, Calendar::Gregorian)
    }
}

impl Renderer {
    pub fn new(time_zone: Tz, locale: Locale, localized: bool, calendar: Calendar) -> Self {
        Self {
            time_zone,
            locale,
            localized,
            calendar,
        }
    }

    /// Build a renderer from validated settings
    pub fn from_settings(settings: &RenderSettings) -> Result<Self, ConfigError> {
        let time_zone = settings.tz().map_err(ConfigError::validation)?;
        let locale = settings.chrono_locale().map_err(ConfigError::validation)?;
        Ok(Self::new(
            time_zone,
            locale,
            settings.localized,
            settings.calendar,
        ))
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Locale used for names and markers
    pub fn effective_locale(&self) -> Locale {
        if self.localized {
            self.locale
        } else {
            Locale::POSIX
        }
    }

    /// Render `instant` with `template`, reporting invalid templates
    pub fn try_render<T: TimeZone>(
        &self,
        instant: &DateTime<T>,
        template: impl AsRef<str>,
    ) -> Result<String, RenderError> {
        let zoned = instant.with_timezone(&self.time_zone);
        let locale = self.effective_locale();
        let mut out = String::new();

        for token in pattern::tokenize(template.as_ref())? {
            match token {
                Token::Literal(text) => out.push_str(&text),
                Token::Field {
                    letter,
                    width,
                    position,
                } => fields::write_field(&mut out, letter, width, position, &zoned, locale)?,
            }
        }

        Ok(out)
    }

    /// Render `instant` with `template`.
    ///
    /// Never fails: an invalid template yields the instant in RFC 3339 form,
    /// in this renderer's time zone.
    pub fn render<T: TimeZone>(&self, instant: &DateTime<T>, template: impl AsRef<str>) -> String {
        let template = template.as_ref();
        match self.try_render(instant, template) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("Cannot render template {:?}: {}; using RFC 3339", template, err);
                instant.with_timezone(&self.time_zone).to_rfc3339()
            }
        }
    }

    /// Render the current time
    pub fn render_now(&self, template: impl AsRef<str>) -> String {
        self.render(&Utc::now(), template)
    }
}

/// One-shot rendering with explicit options
pub fn render<T: TimeZone>(
    instant: &DateTime<T>,
    template: impl AsRef<str>,
    localized: bool,
    time_zone: Tz,
    locale: Locale,
    calendar: Calendar,
) -> String {
    Renderer::new(time_zone, locale, localized, calendar).render(instant, template)
}
