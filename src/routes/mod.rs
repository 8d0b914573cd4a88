pub mod cities;
pub mod forecast;
pub mod health;
