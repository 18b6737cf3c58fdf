use serde::Deserialize;
use serde_with::{serde_as, VecSkipError};
use crate::forecast::models::TimePoint;

/// The part of an SMHI point forecast document that we consume,
/// time series elements that can't be read are dropped
#[serde_as]
#[derive(Deserialize)]
pub struct FullForecast {
    #[serde(rename = "timeSeries")]
    #[serde_as(as = "VecSkipError<_>")]
    pub time_series: Vec<TimePoint>,
}
