use std::fmt;

/// Something noteworthy that happened while serving a forecast.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastEvent {
    CacheHit { city_id: u32 },
    CacheMiss { city_id: u32 },
    UpstreamFailure { city_name: String, reason: String },
    SyntheticFallback { city_name: String },
}

impl fmt::Display for ForecastEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastEvent::CacheHit { city_id } => write!(f, "cache hit for city {city_id}"),
            ForecastEvent::CacheMiss { city_id } => write!(f, "cache miss for city {city_id}"),
            ForecastEvent::UpstreamFailure { city_name, reason } => {
                write!(f, "upstream forecast for {city_name} failed: {reason}")
            }
            ForecastEvent::SyntheticFallback { city_name } => {
                write!(f, "serving synthetic forecast for {city_name}")
            }
        }
    }
}

pub trait ForecastObserver: Send + Sync {
    fn observe(&self, event: ForecastEvent);
}

/// Writes every event to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ForecastObserver for LogObserver {
    fn observe(&self, event: ForecastEvent) {
        match event {
            ForecastEvent::CacheHit { .. } | ForecastEvent::CacheMiss { .. } => {
                log::debug!("{}", event)
            }
            ForecastEvent::UpstreamFailure { .. } => log::warn!("{}", event),
            ForecastEvent::SyntheticFallback { .. } => log::info!("{}", event),
        }
    }
}
