use actix_web::{get, web, HttpResponse, Responder};
use chrono::Local;
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;
use crate::AppState;
use crate::dashboard::models::Location;
use crate::dashboard::render;
use crate::dashboard::state::View;
use crate::forecast::conditions::ThemeMode;
use crate::manager_forecast::refresh;

const MY_LOCATION: &str = "My Location";

#[derive(Deserialize, Debug)]
pub struct SelectParams {
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Deserialize, Debug)]
pub struct ThemeParams {
    mode: ThemeMode,
}

#[get("/cities")]
pub async fn cities(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&data.cities)
}

// /select?city=Stockholm or /select?lat=59.33&lon=18.07
#[get("/select")]
pub async fn select(params: web::Query<SelectParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let location = match (&params.city, params.lat, params.lon) {
        (Some(name), _, _) => {
            match data.cities.iter().find(|c| c.name.to_lowercase() == name.to_lowercase()) {
                Some(city) => city.clone(),
                None => {
                    warn!("unknown city '{}'", name);
                    return HttpResponse::NotFound().json(json!({ "error": format!("unknown city '{}'", name) }));
                }
            }
        }
        (None, Some(lat), Some(lon)) => Location { name: MY_LOCATION.to_string(), lat, lon },
        _ => return HttpResponse::BadRequest().json(json!({ "error": "either city or lat and lon must be given" })),
    };

    data.state.lock().await.select(location.clone());

    let state = data.state.clone();
    let smhi = data.smhi.clone();
    let sun = data.sun.clone();
    actix_web::rt::spawn(async move {
        refresh(&state, &smhi, &sun, location).await;
    });

    HttpResponse::Accepted().finish()
}

#[get("/theme")]
pub async fn theme(params: web::Query<ThemeParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    data.state.lock().await.set_theme_mode(params.mode);

    HttpResponse::Ok().finish()
}

#[get("/dashboard")]
pub async fn dashboard(data: web::Data<AppState>) -> impl Responder {
    let state = data.state.lock().await;

    match state.view() {
        View::Ready(fetched) => {
            HttpResponse::Ok().json(render(fetched, &data.display, state.theme_mode(), &Local::now()))
        }
        View::Failed(error) => HttpResponse::BadGateway().json(json!({ "error": error })),
        View::Pending => HttpResponse::ServiceUnavailable().finish(),
    }
}
