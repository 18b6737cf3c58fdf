use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};

pub const TEMPERATURE: &str = "t";
pub const WEATHER_SYMBOL: &str = "Wsymb2";
pub const HUMIDITY: &str = "r";
pub const WIND_SPEED: &str = "ws";
pub const PRECIPITATION_MEAN: &str = "pmean";
pub const UV_INDEX: &str = "uvi";

/// A named forecast quantity, SMHI sends every value as a list
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub values: Vec<f64>,
}

/// One forecast timestamp with its parameter readings
#[serde_as]
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TimePoint {
    #[serde(rename = "validTime", default)]
    pub valid_time: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl TimePoint {
    /// Returns the first value of the first parameter named `name`.
    ///
    /// Absence is not an error: a missing parameter and a parameter with an
    /// empty value list both give `None`.
    ///
    /// # Arguments
    ///
    /// * 'name' - parameter name, matched case-sensitively
    pub fn param(&self, name: &str) -> Option<f64> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.values.first().copied())
    }

    /// Returns the weather symbol code of this time point if any.
    ///
    /// A present code outside the SMHI table is still returned, it's up to the mapper
    /// to show it as unknown.
    pub fn weather_code(&self) -> Option<i64> {
        self.param(WEATHER_SYMBOL).and_then(to_code)
    }

    /// Returns the calendar date part of the timestamp, i.e. everything before the `T`
    ///
    pub fn date_key(&self) -> Option<NaiveDate> {
        let (date, _) = self.valid_time.split_once('T')?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }

    /// Returns the full timestamp, `None` if it isn't valid rfc3339
    ///
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.valid_time)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Converts a raw symbol value into a weather code
///
/// # Arguments
///
/// * 'value' - the raw value as sent by SMHI
pub fn to_code(value: f64) -> Option<i64> {
    let rounded = value.round();
    rounded.is_finite().then(|| rounded as i64)
}

#[cfg(test)]
pub(crate) fn point(valid_time: &str, params: &[(&str, f64)]) -> TimePoint {
    TimePoint {
        valid_time: valid_time.to_string(),
        parameters: params
            .iter()
            .map(|(name, value)| Parameter { name: name.to_string(), values: vec![*value] })
            .collect(),
    }
}
