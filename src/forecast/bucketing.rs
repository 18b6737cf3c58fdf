use chrono::NaiveDate;
use log::debug;
use crate::forecast::models::TimePoint;

/// Time points sharing one calendar date, in source order
#[derive(Debug, PartialEq)]
pub struct DayGroup<'a> {
    pub date: NaiveDate,
    pub entries: Vec<&'a TimePoint>,
}

/// Partitions a series into groups keyed by the date part of each timestamp.
///
/// Groups come out in the order their dates are first seen in the series, and
/// entries keep their relative order within a group. Entries with a missing or
/// malformed timestamp are skipped.
///
/// # Arguments
///
/// * 'series' - forecast time points, ordered by timestamp
pub fn group_by_date(series: &[TimePoint]) -> Vec<DayGroup<'_>> {
    let mut groups: Vec<DayGroup> = Vec::new();

    for tp in series {
        let Some(date) = tp.date_key() else {
            debug!("skipping time point with malformed timestamp '{}'", tp.valid_time);
            continue;
        };

        match groups.iter_mut().find(|g| g.date == date) {
            Some(group) => group.entries.push(tp),
            None => groups.push(DayGroup { date, entries: vec![tp] }),
        }
    }

    groups
}
