// Settings service
// Loading and saving the TOML configuration file

mod error;
mod service;

pub use error::ConfigError;
pub use service::SettingsService;
