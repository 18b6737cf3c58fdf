use serde::{Deserialize, Serialize};
use crate::forecast::aggregate::{DaySummary, MissingCode};
use crate::forecast::conditions::{Condition, Theme};
use crate::forecast::hours::HourSelection;
use crate::forecast::models::TimePoint;
use crate::manager_sun::SunTimes;
use crate::perceived_temperature::RealFeel;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Everything one fetch cycle brought home for a location
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedForecast {
    pub location: Location,
    pub series: Vec<TimePoint>,
    pub sun: Option<SunTimes>,
}

/// Settings driving how a fetched forecast is turned into a dashboard
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    pub day_count: usize,
    pub hours: HourSelection,
    pub icon_dir: String,
    pub real_feel: RealFeel,
    pub missing_code: MissingCode,
    pub refresh_minutes: u64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            day_count: 4,
            hours: HourSelection::default(),
            icon_dir: "icons".to_string(),
            real_feel: RealFeel::default(),
            missing_code: MissingCode::default(),
            refresh_minutes: 30,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CurrentSnapshot {
    pub city: String,
    pub temperature: Option<f64>,
    #[serde(flatten)]
    pub condition: Condition,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub real_feel: Option<f64>,
    pub precipitation: Option<f64>,
    pub uv_index: Option<f64>,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HourEntry {
    pub time: String,
    pub temperature: Option<f64>,
    #[serde(flatten)]
    pub condition: Condition,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub location: Location,
    pub theme: Theme,
    pub current: Option<CurrentSnapshot>,
    pub hours: Vec<HourEntry>,
    pub days: Vec<DaySummary>,
}
