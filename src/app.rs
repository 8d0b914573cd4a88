use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::response::{IntoResponse, Response};
use std::any::Any;
use std::path::PathBuf;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, route_not_found};
use crate::models::service::ForecastService;
use crate::routes::{cities, forecast, health};

// Anything that goes in here must be a handle or pointer that can be cloned.
// The underlying state itself should be shared.
#[derive(Clone)]
pub struct AppState {
    pub forecasts: ForecastService,
}

/// The complete service. Trailing slashes are trimmed before routing, so
/// `/api/villes/` and `/api/villes` are the same route.
pub type App = NormalizePath<Router>;

pub fn create_app(state: AppState, assets_path: Option<PathBuf>) -> App {
    let mut app = Router::new()
        .nest("/api/villes", cities::routes(state.clone()))
        .nest("/api/meteo", forecast::routes(state))
        .nest("/api/health", health::routes());

    app = match assets_path {
        Some(assets_path) => {
            log::debug!("serving assets from {}", assets_path.display());
            let assets_service = ServeDir::new(assets_path).fallback(route_not_found.into_service());
            app.fallback_service(assets_service)
        }
        None => app.fallback(route_not_found),
    };

    NormalizePath::trim_trailing_slash(with_middleware(app))
}

fn with_middleware(app: Router) -> Router {
    app.layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::internal(format!("request handler panicked: {message}")).into_response()
}
