use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::manager_sun::SunTimes;

const FALLBACK_DESCRIPTION: &str = "Unknown";

/// SMHI Wsymb2 codes, index 0 is code 1
const DESCRIPTIONS: [&str; 27] = [
    "Clear sky",
    "Almost clear",
    "Variable clouds",
    "Half clear",
    "Cloudy",
    "Overcast",
    "Fog",
    "Light rain",
    "Rain showers",
    "Heavy rain",
    "Thunder",
    "Sleet",
    "Light sleet",
    "Light snow",
    "Snow showers",
    "Heavy snow",
    "Freezing rain",
    "Rain",
    "Heavy rain",
    "Storm",
    "Light snow showers",
    "Snow",
    "Heavy snow showers",
    "Hail",
    "Drizzle",
    "Freezing drizzle",
    "Mixed precipitation",
];

/// Icon set to pick symbols from
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Day,
    Night,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Theme::Day => write!(f, "day"),
            Theme::Night => write!(f, "night"),
        }
    }
}

/// How the theme is chosen for a render, manual or following the sun
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Auto,
    Day,
    Night,
}

impl ThemeMode {
    /// Resolves the mode into a concrete theme.
    ///
    /// In automatic mode it is night before sunrise and after sunset. Without sun times
    /// we stay with day.
    ///
    /// # Arguments
    ///
    /// * 'now' - the instant being rendered
    /// * 'sun' - sun times for the rendered location, if they could be fetched
    pub fn resolve(self, now: DateTime<Utc>, sun: Option<&SunTimes>) -> Theme {
        match self {
            ThemeMode::Day => Theme::Day,
            ThemeMode::Night => Theme::Night,
            ThemeMode::Auto => match sun {
                Some(s) if now < s.sunrise || now > s.sunset => Theme::Night,
                _ => Theme::Day,
            },
        }
    }
}

/// Icon and text for a weather code
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Condition {
    pub code: Option<i64>,
    pub icon: String,
    pub description: String,
}

/// Maps weather codes to icon references and descriptions
pub struct ConditionMapper {
    icon_dir: String,
    theme: Theme,
}

impl ConditionMapper {
    /// Creates a mapper resolving icons as `{icon_dir}/{theme}/{code:02}.svg`
    ///
    /// # Arguments
    ///
    /// * 'icon_dir' - base directory of the icon themes
    /// * 'theme' - which icon set to use
    pub fn new(icon_dir: &str, theme: Theme) -> Self {
        Self {
            icon_dir: icon_dir.trim_end_matches('/').to_string(),
            theme,
        }
    }

    /// Maps a weather code, codes outside the table get the fallback pair
    ///
    /// # Arguments
    ///
    /// * 'code' - SMHI weather symbol code
    pub fn map(&self, code: i64) -> Condition {
        match describe(code) {
            Some(description) => Condition {
                code: Some(code),
                icon: format!("{}/{}/{:02}.svg", self.icon_dir, self.theme, code),
                description: description.to_string(),
            },
            None => Condition { code: Some(code), ..self.fallback() },
        }
    }

    /// Maps a possibly absent weather code, absent gives the fallback pair
    ///
    /// # Arguments
    ///
    /// * 'code' - SMHI weather symbol code if any
    pub fn map_opt(&self, code: Option<i64>) -> Condition {
        code.map_or_else(|| self.fallback(), |c| self.map(c))
    }

    fn fallback(&self) -> Condition {
        Condition {
            code: None,
            icon: format!("{}/{}/unknown.svg", self.icon_dir, self.theme),
            description: FALLBACK_DESCRIPTION.to_string(),
        }
    }
}

fn describe(code: i64) -> Option<&'static str> {
    code.checked_sub(1)
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| DESCRIPTIONS.get(i))
        .copied()
}
