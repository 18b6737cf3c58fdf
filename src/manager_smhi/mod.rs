pub mod errors;
mod models;

use std::time::Duration;
use reqwest::Client;
use crate::forecast::models::TimePoint;
use crate::manager_smhi::errors::SMHIError;
use crate::manager_smhi::models::FullForecast;


/// Struct for fetching point forecasts produced by SMHI
pub struct SMHI {
    client: Client,
    base_url: String,
}

impl SMHI {
    /// Returns a SMHI struct ready for fetching point forecasts from SMHI
    ///
    /// # Arguments
    ///
    /// * 'base_url' - point forecast url up to and including the geotype
    /// * 'timeout' - request timeout in seconds
    pub fn new(base_url: &str, timeout: u64) -> Result<SMHI, SMHIError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Retrieves the point forecast time series for the given location.
    ///
    /// The given lat/long values will be truncated to 4 decimals since that is the max
    /// precision that SMHI allows in their forecast API
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'long' - longitude of the location
    pub async fn forecast(&self, lat: f64, long: f64) -> Result<Vec<TimePoint>, SMHIError> {
        let url = self.url(lat, long);

        let req = self.client
            .get(url)
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(SMHIError::Status(format!("error while fetching forecast from SMHI: {}", status)));
        }

        let json = req.text().await?;
        parse_forecast(&json)
    }

    fn url(&self, lat: f64, long: f64) -> String {
        format!("{}/lon/{:0.4}/lat/{:0.4}/data.json", self.base_url, long, lat)
    }
}

/// Parses an SMHI point forecast document into its time series
///
/// # Arguments
///
/// * 'json' - the document
fn parse_forecast(json: &str) -> Result<Vec<TimePoint>, SMHIError> {
    let forecast: FullForecast = serde_json::from_str(json)?;

    if forecast.time_series.is_empty() {
        Err(SMHIError::Document("No time series in forecast".to_string()))
    } else {
        Ok(forecast.time_series)
    }
}
