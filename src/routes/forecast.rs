use axum::extract::{Json, Path, State};
use axum::{Router, routing::get};

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::forecast::DayForecast;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/{city_id}", get(get_forecast))
        .with_state(state)
}

async fn get_forecast(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<Json<Vec<DayForecast>>, ApiError> {
    let city_id = parse_city_id(&city_id).ok_or(ApiError::CityNotFound)?;
    Ok(Json(state.forecasts.forecast(city_id).await?))
}

/// Reads the leading decimal digits of `raw`, so `1abc` is city 1. Leading
/// whitespace and a `+` sign are skipped. Negative ids never name a city.
fn parse_city_id(raw: &str) -> Option<u32> {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let digits_end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..digits_end].parse().ok()
}
