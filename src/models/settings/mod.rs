// Settings module
// Options consumed by the renderer

use chrono::Locale;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::template::{DateTemplate, Piece};

/// Calendar system used to compute field values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calendar {
    /// Proleptic Gregorian calendar
    #[default]
    Gregorian,
}

/// Rendering options as stored in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// IANA time zone name
    pub time_zone: String,
    /// POSIX-style locale name (`en_US`, `fr_FR`, ...)
    pub locale: String,
    /// Render names and markers in `locale` instead of the POSIX locale
    pub localized: bool,
    pub calendar: Calendar,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            time_zone: "UTC".to_string(),
            locale: "en_US".to_string(),
            localized: false,
            calendar: Calendar::Gregorian,
        }
    }
}

impl RenderSettings {
    /// Parse the configured time zone
    pub fn tz(&self) -> Result<Tz, String> {
        self.time_zone
            .parse::<Tz>()
            .map_err(|_| format!("Unknown time zone: {}", self.time_zone))
    }

    /// Parse the configured locale
    pub fn chrono_locale(&self) -> Result<Locale, String> {
        Locale::try_from(self.locale.as_str()).map_err(|_| format!("Unknown locale: {}", self.locale))
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.time_zone.trim().is_empty() {
            return Err("Time zone cannot be empty".to_string());
        }
        if self.locale.trim().is_empty() {
            return Err("Locale cannot be empty".to_string());
        }
        self.tz()?;
        self.chrono_locale()?;
        Ok(())
    }
}

/// Contents of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderSettings,
    /// Builder calls replayed to produce the default template
    pub template: Vec<Piece>,
}

impl Config {
    /// The configured template, if any pieces are present
    pub fn date_template(&self) -> Option<DateTemplate> {
        if self.template.is_empty() {
            None
        } else {
            Some(DateTemplate::from_pieces(&self.template))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = RenderSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tz().unwrap(), Tz::UTC);
        assert!(!settings.localized);
    }

    #[test]
    fn test_unknown_time_zone() {
        let settings = RenderSettings {
            time_zone: "Mars/Olympus_Mons".to_string(),
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("Mars/Olympus_Mons"));
    }

    #[test]
    fn test_unknown_locale() {
        let settings = RenderSettings {
            locale: "xx_YY".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.validate().unwrap_err(), "Unknown locale: xx_YY");
    }

    #[test]
    fn test_empty_locale() {
        let settings = RenderSettings {
            locale: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.validate().unwrap_err(), "Locale cannot be empty");
    }

    #[test]
    fn test_config_without_pieces_has_no_template() {
        assert!(Config::default().date_template().is_none());
    }

    #[test]
    fn test_known_locale() {
        let settings = RenderSettings {
            time_zone: "Europe/Paris".to_string(),
            locale: "fr_FR".to_string(),
            localized: true,
            calendar: Calendar::Gregorian,
        };
        assert!(settings.validate().is_ok());
        assert_eq!(settings.chrono_locale().unwrap(), Locale::fr_FR);
    }
}
