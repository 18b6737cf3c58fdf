use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::forecast::bucketing::group_by_date;
use crate::forecast::conditions::{Condition, ConditionMapper};
use crate::forecast::models::{TimePoint, TEMPERATURE};

/// The code reported for a day whose representative record has no weather symbol
pub const BASELINE_CODE: i64 = 1;

/// What to do when a day has no weather code
#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingCode {
    /// Report the clear sky code
    #[default]
    Baseline,
    /// Report the code as unknown and let the display show its placeholder
    Unknown,
}

/// Aggregated values for one day
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DayStats {
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    #[serde(flatten)]
    pub condition: Condition,
}

/// A labeled day of the forecast
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub label: String,
    #[serde(flatten)]
    pub stats: DayStats,
}

/// Builds per-day summaries out of an hourly series
pub struct DayAggregator<'a> {
    mapper: &'a ConditionMapper,
    missing_code: MissingCode,
    day_count: usize,
}

impl<'a> DayAggregator<'a> {
    /// Creates a new aggregator
    ///
    /// # Arguments
    ///
    /// * 'mapper' - maps the chosen weather code to icon and description
    /// * 'missing_code' - policy for days without a weather code
    /// * 'day_count' - max number of days to summarize
    pub fn new(mapper: &'a ConditionMapper, missing_code: MissingCode, day_count: usize) -> Self {
        Self { mapper, missing_code, day_count }
    }

    /// Summarizes the entries of one day.
    ///
    /// Min and max are taken over all present temperatures and are `None` if there are none.
    /// The weather code is sourced from the entry in the middle of the day, which favours a
    /// midday reading over the night.
    ///
    /// # Arguments
    ///
    /// * 'entries' - the day's time points in chronological order
    pub fn summarize_day(&self, entries: &[&TimePoint]) -> DayStats {
        let (min_temp, max_temp) = entries
            .iter()
            .filter_map(|tp| tp.param(TEMPERATURE))
            .fold((None, None), |(min, max): (Option<f64>, Option<f64>), t| {
                (Some(min.map_or(t, |m| m.min(t))), Some(max.map_or(t, |m| m.max(t))))
            });

        let code = entries
            .get(entries.len() / 2)
            .and_then(|tp| tp.weather_code())
            .or(match self.missing_code {
                MissingCode::Baseline => Some(BASELINE_CODE),
                MissingCode::Unknown => None,
            });

        DayStats {
            min_temp,
            max_temp,
            condition: self.mapper.map_opt(code),
        }
    }

    /// Groups the series by date and summarizes the first days.
    /// The first day is always labeled "Today", the rest by their abbreviated weekday name.
    ///
    /// # Arguments
    ///
    /// * 'series' - forecast time points, ordered by timestamp
    pub fn summarize_days(&self, series: &[TimePoint]) -> Vec<DaySummary> {
        group_by_date(series)
            .into_iter()
            .take(self.day_count)
            .enumerate()
            .map(|(i, group)| DaySummary {
                date: group.date,
                label: if i == 0 { "Today".to_string() } else { group.date.format("%a").to_string() },
                stats: self.summarize_day(&group.entries),
            })
            .collect()
    }
}
