mod dashboard;
mod errors;
mod forecast;
mod handlers;
mod initialization;
mod logging;
mod manager_forecast;
mod manager_smhi;
mod manager_sun;
mod perceived_temperature;

use std::sync::Arc;
use actix_web::{web, App, HttpServer};
use log::info;
use tokio::sync::Mutex;
use crate::dashboard::models::{DisplaySettings, Location};
use crate::dashboard::state::DashboardState;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_forecast::run_refresh_loop;
use crate::manager_smhi::SMHI;
use crate::manager_sun::Sun;

pub struct AppState {
    state: Arc<Mutex<DashboardState>>,
    smhi: Arc<SMHI>,
    sun: Arc<Sun>,
    cities: Vec<Location>,
    display: DisplaySettings,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let smhi = Arc::new(SMHI::new(&config.smhi.base_url, config.smhi.timeout_secs)?);
    let sun = Arc::new(Sun::new(&config.sun.base_url, config.sun.timeout_secs)?);

    let initial = config.cities
        .first()
        .cloned()
        .ok_or_else(|| UnrecoverableError("no cities configured".to_string()))?;
    info!("starting with {}", initial.name);
    let state = Arc::new(Mutex::new(DashboardState::new(initial, config.general.theme_mode)));

    actix_web::rt::spawn(run_refresh_loop(
        state.clone(),
        smhi.clone(),
        sun.clone(),
        config.display.refresh_minutes,
    ));

    let cities = config.cities;
    let display = config.display;
    let app_state = web::Data::new(AppState { state, smhi, sun, cities, display });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .service(handlers::cities)
            .service(handlers::select)
            .service(handlers::theme)
            .service(handlers::dashboard)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
