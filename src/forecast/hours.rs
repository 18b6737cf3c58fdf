use chrono::{NaiveDate, TimeZone, Timelike};
use serde::Deserialize;
use crate::forecast::models::TimePoint;

/// How entries for the hourly display are picked
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HourSelection {
    /// First entry of today for each listed hour, in list order
    TargetHours { hours: Vec<u32> },
    /// Every `step`-th entry among the first `take` entries
    Stride { take: usize, step: usize },
}

impl Default for HourSelection {
    fn default() -> Self {
        HourSelection::TargetHours { hours: vec![6, 9, 12, 15, 18, 21] }
    }
}

/// Picks the entries to show in the hourly display.
///
/// In target hour mode only entries on `today` (in the given time zone) are considered,
/// and targets without a matching entry are left out.
///
/// # Arguments
///
/// * 'series' - forecast time points, ordered by timestamp
/// * 'selection' - selection policy
/// * 'today' - the local date to select hours from
/// * 'tz' - the time zone hours and dates are evaluated in
pub fn select_hours<'a, Tz: TimeZone>(
    series: &'a [TimePoint],
    selection: &HourSelection,
    today: NaiveDate,
    tz: &Tz,
) -> Vec<&'a TimePoint> {
    match selection {
        HourSelection::TargetHours { hours } => {
            let todays: Vec<(u32, &TimePoint)> = series
                .iter()
                .filter_map(|tp| {
                    let local = tp.timestamp()?.with_timezone(tz);
                    (local.date_naive() == today).then(|| (local.hour(), tp))
                })
                .collect();

            hours
                .iter()
                .filter_map(|h| todays.iter().find(|(hour, _)| hour == h).map(|(_, tp)| *tp))
                .collect()
        }
        HourSelection::Stride { take, step } => {
            series.iter().take(*take).step_by((*step).max(1)).collect()
        }
    }
}
