use std::fs;
use log::info;
use serde::Deserialize;
use crate::dashboard::models::{DisplaySettings, Location};
use crate::errors::ConfigError;
use crate::forecast::conditions::ThemeMode;
use crate::forecast::hours::HourSelection;
use crate::logging::setup_logger;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Deserialize)]
pub struct General {
    pub log_path: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_true")]
    pub log_to_stdout: bool,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

#[derive(Deserialize)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize)]
pub struct SmhiParameters {
    #[serde(default = "default_smhi_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Deserialize)]
pub struct SunParameters {
    #[serde(default = "default_sun_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Deserialize)]
pub struct Config {
    pub general: General,
    pub web_server: WebServer,
    pub smhi: SmhiParameters,
    pub sun: SunParameters,
    #[serde(default)]
    pub display: DisplaySettings,
    pub cities: Vec<Location>,
}

/// Loads the configuration and starts logging.
///
/// The config file path is given as the first command line argument, `config.toml` if none.
///
pub fn config() -> Result<Config, ConfigError> {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = load_config(&path)?;

    setup_logger(&config.general)?;
    info!("configuration loaded from {}", path);

    Ok(config)
}

/// Reads and validates the configuration file
///
/// # Arguments
///
/// * 'path' - path to the toml config file
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&toml)?;
    validate(&config)?;

    Ok(config)
}

/// One day, forecasts are not updated less often than that
const MAX_REFRESH_MINUTES: u64 = 1440;

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.cities.is_empty() {
        return Err("at least one city must be configured".into());
    }

    let display = &config.display;
    if !(4..=7).contains(&display.day_count) {
        return Err(format!("day_count must be within 4 to 7, got {}", display.day_count).into());
    }
    if !(1..=MAX_REFRESH_MINUTES).contains(&display.refresh_minutes) {
        return Err(format!(
            "refresh_minutes must be within 1 to {}, got {}", MAX_REFRESH_MINUTES, display.refresh_minutes
        ).into());
    }
    match &display.hours {
        HourSelection::TargetHours { hours } => {
            if let Some(h) = hours.iter().find(|h| **h > 23) {
                return Err(format!("target hour {} is not an hour of the day", h).into());
            }
        }
        HourSelection::Stride { take, step } => {
            if *take == 0 || *step == 0 {
                return Err("stride take and step must be positive".into());
            }
        }
    }

    Ok(())
}

fn default_log_level() -> String { "info".to_string() }
fn default_true() -> bool { true }
fn default_timeout() -> u64 { 30 }
fn default_smhi_url() -> String {
    "https://opendata-download-metfcst.smhi.se/api/category/pmp3g/version/2/geotype/point".to_string()
}
fn default_sun_url() -> String { "https://api.sunrise-sunset.org/json".to_string() }

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use crate::forecast::aggregate::MissingCode;
    use crate::perceived_temperature::RealFeel;

    const FULL: &str = r#"
[general]
log_level = "debug"
log_to_stdout = false
theme_mode = "night"

[web_server]
bind_address = "127.0.0.1"
bind_port = 8080

[smhi]
timeout_secs = 10

[sun]

[display]
day_count = 7
icon_dir = "static/icons"
real_feel = "ambient"
missing_code = "unknown"
hours = { mode = "stride", take = 12, step = 2 }

[[cities]]
name = "Stockholm"
lat = 59.3293
lon = 18.0686

[[cities]]
name = "Malmö"
lat = 55.605
lon = 13.0038
"#;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn should_load_full_config() {
        let file = write_config(FULL);

        let config = load_config(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.general.theme_mode, ThemeMode::Night);
        assert_eq!(config.web_server.bind_port, 8080);
        assert_eq!(config.smhi.timeout_secs, 10);
        assert_eq!(config.sun.base_url, "https://api.sunrise-sunset.org/json");
        assert_eq!(config.display.day_count, 7);
        assert_eq!(config.display.real_feel, RealFeel::Ambient);
        assert_eq!(config.display.missing_code, MissingCode::Unknown);
        assert_eq!(config.display.hours, HourSelection::Stride { take: 12, step: 2 });
        assert_eq!(config.display.refresh_minutes, 30);
        assert_eq!(config.cities.len(), 2);
        assert_eq!(config.cities[1].name, "Malmö");
    }

    #[test]
    fn should_default_display_settings() {
        let minimal = FULL.split("[display]").next().unwrap().to_string()
            + "[[cities]]\nname = \"Gothenburg\"\nlat = 57.7089\nlon = 11.9746\n";
        let file = write_config(&minimal);

        let config = load_config(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.display, DisplaySettings::default());
        assert_eq!(config.display.hours, HourSelection::TargetHours { hours: vec![6, 9, 12, 15, 18, 21] });
    }

    #[test]
    fn should_reject_invalid_settings() {
        let file = write_config(&FULL.replace("day_count = 7", "day_count = 9"));
        assert!(load_config(file.path().to_str().unwrap()).is_err());

        let file = write_config(&FULL.replace("step = 2", "step = 0"));
        assert!(load_config(file.path().to_str().unwrap()).is_err());

        let file = write_config(
            &FULL.replace("{ mode = \"stride\", take = 12, step = 2 }", "{ mode = \"target_hours\", hours = [6, 24] }"),
        );
        assert!(load_config(file.path().to_str().unwrap()).is_err());

        let file = write_config(&FULL.replace("day_count = 7", "day_count = 7\nrefresh_minutes = 0"));
        assert!(load_config(file.path().to_str().unwrap()).is_err());

        let no_cities = FULL.split("[[cities]]").next().unwrap();
        let file = write_config(no_cities);
        assert!(load_config(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn should_reject_oversized_refresh_interval() {
        let file = write_config(&FULL.replace("day_count = 7", "day_count = 7\nrefresh_minutes = 100000"));
        let err = load_config(file.path().to_str().unwrap()).err().unwrap();
        assert!(err.to_string().contains("refresh_minutes"));

        let file = write_config(&FULL.replace("day_count = 7", "day_count = 7\nrefresh_minutes = 1440"));
        assert_eq!(load_config(file.path().to_str().unwrap()).unwrap().display.refresh_minutes, 1440);
    }

    #[test]
    fn should_fail_on_missing_file() {
        assert!(load_config("/nonexistent/weatherboard.toml").is_err());
    }
}
