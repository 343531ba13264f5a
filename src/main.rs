// Date Template command line
// Main entry point

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;

use date_template::services::settings::SettingsService;
use date_template::{DateTemplate, Digits, MonthStyle, Renderer, YearStyle};

#[derive(Parser)]
#[command(name = "date-template")]
#[command(about = "Render a date with a format template", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Template pattern, e.g. "yyyy-MM-dd, HH:mm"; overrides the configured template
    #[arg(short, long)]
    template: Option<String>,

    /// Instant to render, in RFC 3339 form (defaults to now)
    #[arg(long)]
    at: Option<String>,

    /// IANA time zone, overrides the config file
    #[arg(long)]
    time_zone: Option<String>,

    /// Locale name such as fr_FR, overrides the config file
    #[arg(long)]
    locale: Option<String>,

    /// Use locale-specific names and markers
    #[arg(long)]
    localized: bool,

    /// Print the template instead of rendering it
    #[arg(long)]
    show_template: bool,
}

fn default_template() -> DateTemplate {
    DateTemplate::new()
        .year(YearStyle::Full)
        .month(MonthStyle::Short)
        .day(Digits::Two)
        .time(false)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let service = match cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::at_default_location()?,
    };
    let mut config = service
        .load()
        .with_context(|| format!("Failed to load {}", service.path().display()))?;

    if let Some(time_zone) = cli.time_zone {
        config.render.time_zone = time_zone;
    }
    if let Some(locale) = cli.locale {
        config.render.locale = locale;
    }
    if cli.localized {
        config.render.localized = true;
    }

    let template = match cli.template {
        Some(pattern) => pattern,
        None => config
            .date_template()
            .unwrap_or_else(default_template)
            .to_string(),
    };

    if cli.show_template {
        println!("{template}");
        return Ok(());
    }

    let renderer = Renderer::from_settings(&config.render).context("Invalid render settings")?;
    log::info!("Rendering {:?} in {}", template, renderer.time_zone());

    let text = match cli.at {
        Some(at) => {
            let instant = DateTime::parse_from_rfc3339(&at)
                .with_context(|| format!("Invalid --at value: {at}"))?;
            renderer.render(&instant, &template)
        }
        None => renderer.render(&Utc::now(), &template),
    };

    println!("{text}");
    Ok(())
}
