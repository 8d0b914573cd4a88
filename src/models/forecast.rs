use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of days in a complete forecast, today included.
pub const FORECAST_DAYS: usize = 7;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionCategory {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Condition {
    #[serde(rename = "main")]
    pub category: ConditionCategory,
    pub description: String,
    pub icon: String,
}

impl Condition {
    pub fn new(category: ConditionCategory, description: &str, icon: &str) -> Condition {
        Condition {
            category,
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Daily temperatures in degrees Celsius. `min <= max` is not guaranteed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Temperature {
    pub min: i32,
    pub max: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayForecast {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(rename = "dateLisible")]
    pub human_date: String,
    pub temperature: Temperature,
    pub condition: Condition,
    #[serde(rename = "ville")]
    pub city_name: String,
}

const WEEKDAYS: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

pub fn french_weekday(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

pub fn french_month(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Long form French date, e.g. "lundi 20 octobre".
pub fn french_long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        french_weekday(date),
        date.day(),
        french_month(date)
    )
}

/// Rounds like `Math.round`: halves go towards positive infinity.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
