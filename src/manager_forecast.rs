use std::sync::Arc;
use chrono::Local;
use log::{error, info, warn};
use tokio::sync::Mutex;
use crate::dashboard::models::{FetchedForecast, Location};
use crate::dashboard::state::DashboardState;
use crate::manager_smhi::SMHI;
use crate::manager_sun::Sun;

/// Runs one fetch cycle for a location and hands the result to the dashboard state.
///
/// Forecast and sun times are fetched concurrently. Failing sun times only leave the
/// sunrise/sunset placeholders empty, a failing forecast marks the cycle as failed.
///
/// # Arguments
///
/// * 'state' - dashboard state to report into
/// * 'smhi' - forecast provider
/// * 'sun' - sun times provider
/// * 'location' - the location this cycle is for
pub async fn refresh(state: &Mutex<DashboardState>, smhi: &SMHI, sun: &Sun, location: Location) {
    let today = Local::now().date_naive();

    let (forecast, sun_times) = tokio::join!(
        smhi.forecast(location.lat, location.lon),
        sun.sun_times(location.lat, location.lon, today),
    );

    let sun_times = match sun_times {
        Ok(s) => Some(s),
        Err(e) => {
            warn!("failed to get sun times for {}: {}", location.name, e);
            None
        }
    };

    match forecast {
        Ok(series) => {
            info!("got {} forecast entries for {}", series.len(), location.name);
            state.lock().await.accept(FetchedForecast { location, series, sun: sun_times });
        }
        Err(e) => {
            error!("failed to get forecast for {}: {}", location.name, e);
            state.lock().await.reject(&location, e.to_string());
        }
    }
}

/// Forecast refresh loop, fetches for whatever location is selected at each turn
///
/// # Arguments
///
/// * 'state' - dashboard state
/// * 'smhi' - forecast provider
/// * 'sun' - sun times provider
/// * 'refresh_minutes' - minutes between fetch cycles
pub async fn run_refresh_loop(state: Arc<Mutex<DashboardState>>, smhi: Arc<SMHI>, sun: Arc<Sun>, refresh_minutes: u64) {
    loop {
        let location = state.lock().await.selected().clone();
        refresh(&state, &smhi, &sun, location).await;

        tokio::time::sleep(tokio::time::Duration::from_secs(refresh_minutes.saturating_mul(60))).await;
    }
}
