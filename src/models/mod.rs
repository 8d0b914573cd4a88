pub mod cache;
pub mod city;
pub mod clock;
pub mod condition_codes;
pub mod events;
pub mod forecast;
pub mod meteo_concept;
pub mod provider;
pub mod service;
pub mod synthetic;
