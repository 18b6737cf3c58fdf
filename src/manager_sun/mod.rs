pub mod errors;
mod models;

use std::time::Duration;
use chrono::NaiveDate;
use reqwest::Client;
use crate::manager_sun::errors::SunError;
use crate::manager_sun::models::SunResponse;

pub use crate::manager_sun::models::SunTimes;

/// Struct for fetching sunrise and sunset times from sunrise-sunset.org
pub struct Sun {
    client: Client,
    base_url: String,
}

impl Sun {
    /// Returns a Sun struct ready for fetching sun times
    ///
    /// # Arguments
    ///
    /// * 'base_url' - url of the json endpoint
    /// * 'timeout' - request timeout in seconds
    pub fn new(base_url: &str, timeout: u64) -> Result<Sun, SunError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Retrieves sunrise and sunset (UTC) for the given location and date
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'long' - longitude of the location
    /// * 'date' - the date to get sun times for
    pub async fn sun_times(&self, lat: f64, long: f64, date: NaiveDate) -> Result<SunTimes, SunError> {
        let url = format!("{}?lat={}&lng={}&date={}&formatted=0",
                          self.base_url, lat, long, date.format("%Y-%m-%d"));

        let req = self.client
            .get(url)
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(SunError::Status(format!("error while fetching sun times: {}", status)));
        }

        let json = req.text().await?;
        parse_sun_times(&json)
    }
}

/// Parses a sunrise-sunset.org response
///
/// # Arguments
///
/// * 'json' - the response body
fn parse_sun_times(json: &str) -> Result<SunTimes, SunError> {
    let response: SunResponse = serde_json::from_str(json)?;

    match response.results {
        Some(r) if response.status == "OK" => Ok(SunTimes { sunrise: r.sunrise, sunset: r.sunset }),
        _ => Err(SunError::Status(response.status)),
    }
}
