pub mod models;
pub mod state;

use std::fmt::Display;
use chrono::{DateTime, TimeZone, Utc};
use crate::dashboard::models::{CurrentSnapshot, Dashboard, DisplaySettings, FetchedForecast, HourEntry, Location};
use crate::forecast::aggregate::DayAggregator;
use crate::forecast::conditions::{ConditionMapper, ThemeMode};
use crate::forecast::hours::select_hours;
use crate::forecast::models::{TimePoint, HUMIDITY, PRECIPITATION_MEAN, TEMPERATURE, UV_INDEX, WIND_SPEED};
use crate::manager_sun::SunTimes;
use crate::perceived_temperature::{round_tenth, RealFeel};

/// Entries looked at for the precipitation reading
const PRECIPITATION_WINDOW: usize = 12;
/// Entries looked at for the max UV index
const UV_WINDOW: usize = 24;

/// Renders a fetched forecast into the data shown on the dashboard.
///
/// Nothing is cached, every call recomputes the current snapshot, the hourly
/// entries and the day summaries. An empty series renders no snapshot and no
/// hours or days.
///
/// # Arguments
///
/// * 'fetched' - the result of the latest fetch cycle
/// * 'settings' - display settings
/// * 'theme_mode' - manual or automatic day/night theme
/// * 'now' - render instant, its time zone is used for "today" and all clock times
pub fn render<Tz: TimeZone>(
    fetched: &FetchedForecast,
    settings: &DisplaySettings,
    theme_mode: ThemeMode,
    now: &DateTime<Tz>,
) -> Dashboard
where
    Tz::Offset: Display,
{
    let tz = now.timezone();
    let theme = theme_mode.resolve(now.with_timezone(&Utc), fetched.sun.as_ref());
    let mapper = ConditionMapper::new(&settings.icon_dir, theme);

    let current = fetched.series.first().map(|first| {
        current_snapshot(first, &fetched.series, &fetched.location, fetched.sun.as_ref(), settings.real_feel, &mapper, &tz)
    });

    let hours = select_hours(&fetched.series, &settings.hours, now.date_naive(), &tz)
        .into_iter()
        .map(|tp| HourEntry {
            time: clock_time(tp, &tz),
            temperature: tp.param(TEMPERATURE),
            condition: mapper.map_opt(tp.weather_code()),
        })
        .collect();

    let days = DayAggregator::new(&mapper, settings.missing_code, settings.day_count)
        .summarize_days(&fetched.series);

    Dashboard {
        location: fetched.location.clone(),
        theme,
        current,
        hours,
        days,
    }
}

/// Builds the current conditions from the first record of the series
///
/// # Arguments
///
/// * 'now' - the record representing current conditions
/// * 'series' - the full series, used for the precipitation and UV outlook
/// * 'location' - the location being shown
/// * 'sun' - sun times if they could be fetched
/// * 'real_feel' - real feel policy
/// * 'mapper' - condition mapper
/// * 'tz' - time zone for sunrise/sunset clock times
fn current_snapshot<Tz: TimeZone>(
    now: &TimePoint,
    series: &[TimePoint],
    location: &Location,
    sun: Option<&SunTimes>,
    real_feel: RealFeel,
    mapper: &ConditionMapper,
    tz: &Tz,
) -> CurrentSnapshot
where
    Tz::Offset: Display,
{
    let temperature = now.param(TEMPERATURE);
    let humidity = now.param(HUMIDITY);
    let wind_speed = now.param(WIND_SPEED);

    let precipitation = series
        .iter()
        .take(PRECIPITATION_WINDOW)
        .find_map(|tp| tp.param(PRECIPITATION_MEAN));

    let uv_index = series
        .iter()
        .take(UV_WINDOW)
        .filter_map(|tp| tp.param(UV_INDEX))
        .fold(None, |max: Option<f64>, uv| Some(max.map_or(uv, |m| m.max(uv))))
        .map(f64::round);

    CurrentSnapshot {
        city: location.name.clone(),
        temperature,
        condition: mapper.map_opt(now.weather_code()),
        humidity,
        wind_speed,
        wind_speed_kmh: wind_speed.map(|ws| round_tenth(ws * 3.6)),
        real_feel: real_feel.real_feel(temperature, humidity),
        precipitation,
        uv_index,
        sunrise: sun.map(|s| s.sunrise.with_timezone(tz).format("%H:%M").to_string()),
        sunset: sun.map(|s| s.sunset.with_timezone(tz).format("%H:%M").to_string()),
    }
}

fn clock_time<Tz: TimeZone>(tp: &TimePoint, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    tp.timestamp()
        .map(|ts| ts.with_timezone(tz).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use crate::forecast::conditions::Theme;
    use crate::forecast::hours::HourSelection;
    use crate::forecast::models::{point, WEATHER_SYMBOL};

    fn stockholm() -> Location {
        Location { name: "Stockholm".to_string(), lat: 59.3293, lon: 18.0686 }
    }

    fn series() -> Vec<TimePoint> {
        let mut series = Vec::new();
        for day in 19..=22 {
            for hour in (0..24).step_by(3) {
                let ts = format!("2025-10-{}T{:02}:00:00Z", day, hour);
                series.push(point(&ts, &[
                    (TEMPERATURE, (day - 19) as f64 + hour as f64 / 3.0),
                    (WEATHER_SYMBOL, if hour == 12 { 9.0 } else { 3.0 }),
                    (HUMIDITY, 50.0),
                    (WIND_SPEED, 5.0),
                ]));
            }
        }
        series[1].parameters.push(crate::forecast::models::Parameter {
            name: PRECIPITATION_MEAN.to_string(),
            values: vec![0.4],
        });
        series
    }

    fn fetched(series: Vec<TimePoint>, sun: Option<SunTimes>) -> FetchedForecast {
        FetchedForecast { location: stockholm(), series, sun }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn should_render_full_dashboard() {
        let sun = SunTimes {
            sunrise: Utc.with_ymd_and_hms(2025, 10, 19, 5, 50, 0).unwrap(),
            sunset: Utc.with_ymd_and_hms(2025, 10, 19, 15, 31, 0).unwrap(),
        };
        let dashboard = render(&fetched(series(), Some(sun)), &DisplaySettings::default(), ThemeMode::Auto, &noon());

        assert_eq!(dashboard.theme, Theme::Day);

        let current = dashboard.current.unwrap();
        assert_eq!(current.city, "Stockholm");
        assert_eq!(current.temperature, Some(0.0));
        assert_eq!(current.condition.description, "Variable clouds");
        assert_eq!(current.condition.icon, "icons/day/03.svg");
        assert_eq!(current.wind_speed_kmh, Some(18.0));
        assert_eq!(current.precipitation, Some(0.4));
        assert_eq!(current.uv_index, None);
        assert_eq!(current.sunrise.as_deref(), Some("05:50"));
        assert_eq!(current.sunset.as_deref(), Some("15:31"));
        assert!(current.real_feel.is_some());

        let times: Vec<&str> = dashboard.hours.iter().map(|h| h.time.as_str()).collect();
        assert_eq!(times, vec!["06:00", "09:00", "12:00", "15:00", "18:00", "21:00"]);
        assert_eq!(dashboard.hours[2].condition.description, "Rain showers");

        let labels: Vec<&str> = dashboard.days.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Today", "Mon", "Tue", "Wed"]);
        assert_eq!(dashboard.days[1].stats.min_temp, Some(1.0));
        assert_eq!(dashboard.days[1].stats.max_temp, Some(8.0));
        assert_eq!(dashboard.days[1].stats.condition.description, "Rain showers");
    }

    #[test]
    fn should_render_placeholders_without_sun_times() {
        let settings = DisplaySettings { real_feel: RealFeel::Ambient, ..DisplaySettings::default() };
        let dashboard = render(&fetched(series(), None), &settings, ThemeMode::Night, &noon());

        let current = dashboard.current.unwrap();
        assert_eq!(current.sunrise, None);
        assert_eq!(current.sunset, None);
        assert_eq!(current.real_feel, Some(0.0));
        assert_eq!(current.condition.icon, "icons/night/03.svg");
    }

    #[test]
    fn should_render_clock_times_in_local_zone() {
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = noon().with_timezone(&cest);
        let settings = DisplaySettings {
            hours: HourSelection::TargetHours { hours: vec![2, 14] },
            ..DisplaySettings::default()
        };

        let dashboard = render(&fetched(series(), None), &settings, ThemeMode::Day, &now);

        let times: Vec<&str> = dashboard.hours.iter().map(|h| h.time.as_str()).collect();
        assert_eq!(times, vec!["02:00", "14:00"]);
        assert_eq!(dashboard.hours[1].condition.code, Some(9));
    }

    #[test]
    fn should_render_empty_series() {
        let dashboard = render(&fetched(Vec::new(), None), &DisplaySettings::default(), ThemeMode::Auto, &noon());

        assert_eq!(dashboard.current, None);
        assert!(dashboard.hours.is_empty());
        assert!(dashboard.days.is_empty());
    }

    #[test]
    fn should_report_max_uv_index() {
        let mut s = series();
        for (i, uv) in [(0, 1.2), (5, 3.6), (30, 7.0)] {
            s[i].parameters.push(crate::forecast::models::Parameter {
                name: UV_INDEX.to_string(),
                values: vec![uv],
            });
        }

        let dashboard = render(&fetched(s, None), &DisplaySettings::default(), ThemeMode::Day, &noon());

        assert_eq!(dashboard.current.unwrap().uv_index, Some(4.0));
    }
}
