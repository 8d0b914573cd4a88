use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

use crate::models::forecast::{
    Condition, ConditionCategory, DayForecast, FORECAST_DAYS, Temperature, french_month,
    french_weekday,
};

const SYNTHETIC_CONDITIONS: [(ConditionCategory, &str, &str); 4] = [
    (ConditionCategory::Clear, "ensoleillé", "01d"),
    (ConditionCategory::Clouds, "partiellement nuageux", "02d"),
    (ConditionCategory::Clouds, "nuageux", "03d"),
    (ConditionCategory::Rain, "pluvieux", "10d"),
];

/// Generates placeholder forecasts when the upstream provider is unavailable.
///
/// Minimum temperatures are drawn from 25..=34 and maximum temperatures from
/// 35..=44. The two draws are independent.
pub struct SyntheticForecast {
    rng: Mutex<StdRng>,
}

impl SyntheticForecast {
    pub fn new(rng: StdRng) -> SyntheticForecast {
        SyntheticForecast {
            rng: Mutex::new(rng),
        }
    }

    pub fn from_os_rng() -> SyntheticForecast {
        SyntheticForecast::new(StdRng::from_os_rng())
    }

    #[cfg(test)]
    pub fn from_seed(seed: u64) -> SyntheticForecast {
        SyntheticForecast::new(StdRng::seed_from_u64(seed))
    }

    /// Seven days of made up weather for `city_name`, starting at `today`.
    pub fn generate(&self, city_name: &str, today: NaiveDate) -> Vec<DayForecast> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        (0..FORECAST_DAYS)
            .map(|offset| {
                let date = today + Duration::days(offset as i64);
                let (category, description, icon) =
                    SYNTHETIC_CONDITIONS[rng.random_range(0..SYNTHETIC_CONDITIONS.len())];
                let min = 25 + rng.random_range(0..10);
                let max = 35 + rng.random_range(0..10);
                DayForecast {
                    date: date.format("%Y-%m-%d").to_string(),
                    human_date: synthetic_human_date(date),
                    temperature: Temperature { min, max },
                    condition: Condition::new(category, description, icon),
                    city_name: city_name.to_string(),
                }
            })
            .collect()
    }
}

// The weekday is the real weekday of `date`, counted from Monday.
fn synthetic_human_date(date: NaiveDate) -> String {
    let weekday = french_weekday(date);
    let mut chars = weekday.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{} {} {}", capitalized, date.day(), french_month(date))
}

#[cfg(test)]
mod test {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 20).unwrap()
    }

    #[test]
    fn generates_seven_consecutive_days() {
        let forecast = SyntheticForecast::from_seed(7).generate("Pala", monday());
        assert_eq!(forecast.len(), FORECAST_DAYS);
        let dates: Vec<&str> = forecast.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(
            dates,
            vec![
                "2025-10-20",
                "2025-10-21",
                "2025-10-22",
                "2025-10-23",
                "2025-10-24",
                "2025-10-25",
                "2025-10-26"
            ]
        );
        assert_eq!(forecast[0].human_date, "Lundi 20 octobre");
        assert_eq!(forecast[6].human_date, "Dimanche 26 octobre");
        assert!(forecast.iter().all(|d| d.city_name == "Pala"));
    }

    #[test]
    fn human_date_crosses_month_boundary() {
        let forecast = SyntheticForecast::from_seed(1)
            .generate("Sarh", NaiveDate::from_ymd_opt(2025, 12, 29).unwrap());
        assert_eq!(forecast[3].date, "2026-01-01");
        assert_eq!(forecast[3].human_date, "Jeudi 1 janvier");
    }

    #[test]
    fn values_stay_within_ranges() {
        let generator = SyntheticForecast::from_seed(42);
        for _ in 0..50 {
            for day in generator.generate("Mongo", monday()) {
                assert!((25..=34).contains(&day.temperature.min));
                assert!((35..=44).contains(&day.temperature.max));
                assert!(SYNTHETIC_CONDITIONS.iter().any(|(category, description, icon)| {
                    day.condition == Condition::new(*category, description, icon)
                }));
            }
        }
    }

    #[test]
    fn same_seed_gives_same_forecast() {
        let first = SyntheticForecast::from_seed(1234).generate("Kélo", monday());
        let second = SyntheticForecast::from_seed(1234).generate("Kélo", monday());
        assert_eq!(first, second);
    }
}
