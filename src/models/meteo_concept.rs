//! Client for the Meteo Concept daily forecast API.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;
use std::time::Duration;

use crate::models::condition_codes::condition_for_code;
use crate::models::forecast::{
    DayForecast, FORECAST_DAYS, Temperature, french_long_date, round_half_up,
};
use crate::models::provider::{ForecastSource, UpstreamError};

pub const METEO_CONCEPT_API_BASE: &str = "https://api.meteo-concept.com/api";
/// INSEE code of Paris.
pub const DEFAULT_INSEE: &str = "75056";

#[derive(Debug, Clone)]
pub struct MeteoConceptSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub insee: String,
    pub timeout: Duration,
}

#[derive(Deserialize, Debug)]
struct DailyForecastResponse {
    forecast: Option<Vec<UpstreamDay>>,
}

#[derive(Deserialize, Debug)]
struct UpstreamDay {
    datetime: String,
    tmin: f64,
    tmax: f64,
    weather: Option<i64>,
}

/// Fetches forecasts for the configured INSEE code, whatever city is asked
/// for. The city name is only used to label the result.
pub struct MeteoConceptClient {
    client: reqwest::Client,
    settings: MeteoConceptSettings,
}

impl MeteoConceptClient {
    pub fn new(settings: MeteoConceptSettings) -> Result<MeteoConceptClient, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(MeteoConceptClient { client, settings })
    }
}

#[async_trait]
impl ForecastSource for MeteoConceptClient {
    async fn fetch_daily(&self, city_name: &str) -> Result<Vec<DayForecast>, UpstreamError> {
        let token = self
            .settings
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingToken)?;
        let url = format!("{}/forecast/daily", self.settings.base_url);
        log::debug!("Requesting forecast for insee {}", self.settings.insee);

        let response: DailyForecastResponse = self
            .client
            .get(&url)
            .query(&[("token", token), ("insee", self.settings.insee.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let days = response.forecast.ok_or(UpstreamError::MissingForecast)?;
        transform_forecast(days, city_name)
    }
}

fn forecast_date(datetime: &str) -> Result<NaiveDate, UpstreamError> {
    DateTime::<FixedOffset>::parse_from_rfc3339(datetime)
        .or_else(|_| DateTime::parse_from_str(datetime, "%Y-%m-%dT%H:%M:%S%z"))
        .map(|datetime| datetime.date_naive())
        .map_err(|_| UpstreamError::InvalidDate {
            value: datetime.to_string(),
        })
}

/// Keeps at most the first seven days. Shorter forecasts are not padded.
fn transform_forecast(
    days: Vec<UpstreamDay>,
    city_name: &str,
) -> Result<Vec<DayForecast>, UpstreamError> {
    days.into_iter()
        .take(FORECAST_DAYS)
        .map(|day| {
            let date = forecast_date(&day.datetime)?;
            Ok(DayForecast {
                date: date.format("%Y-%m-%d").to_string(),
                human_date: french_long_date(date),
                temperature: Temperature {
                    min: round_half_up(day.tmin),
                    max: round_half_up(day.tmax),
                },
                condition: condition_for_code(day.weather),
                city_name: city_name.to_string(),
            })
        })
        .collect()
}
