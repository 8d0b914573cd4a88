use axum::ServiceExt;
use axum::extract::Request;
use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::app::{AppState, create_app};
use crate::error::ServerError;
use crate::models::cache::ForecastCache;
use crate::models::city::CityRegistry;
use crate::models::clock::{Clock, SystemClock};
use crate::models::events::{ForecastObserver, LogObserver};
use crate::models::meteo_concept::{
    DEFAULT_INSEE, METEO_CONCEPT_API_BASE, MeteoConceptClient, MeteoConceptSettings,
};
use crate::models::provider::FallbackProvider;
use crate::models::service::ForecastService;
use crate::models::synthetic::SyntheticForecast;

mod app;
mod error;
mod models;
mod routes;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// Meteo Concept API token. Without it, forecasts are synthetic.
    #[arg(long, env = "METEO_CONCEPT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "METEO_CONCEPT_URL", default_value = METEO_CONCEPT_API_BASE)]
    upstream_url: String,

    /// INSEE code requested upstream for every city.
    #[arg(long, env = "METEO_CONCEPT_INSEE", default_value = DEFAULT_INSEE)]
    insee: String,

    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    upstream_timeout_secs: u64,

    #[arg(short, long, env = "KEY_FILE_PATH")]
    key_file_path: Option<PathBuf>,

    #[arg(short, long, env = "CERT_FILE_PATH")]
    cert_file_path: Option<PathBuf>,

    /// Directory with the browser client, served for all non-API paths.
    #[arg(short, long, env = "ASSETS_PATH")]
    assets_path: Option<PathBuf>,
}

fn create_forecast_service(args: &Args) -> Result<ForecastService, ServerError> {
    if args.api_key.is_none() {
        log::warn!("METEO_CONCEPT_API_KEY is not set, all forecasts will be synthetic");
    }
    let client = MeteoConceptClient::new(MeteoConceptSettings {
        base_url: args.upstream_url.clone(),
        api_key: args.api_key.clone(),
        insee: args.insee.clone(),
        timeout: Duration::from_secs(args.upstream_timeout_secs),
    })?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let observer: Arc<dyn ForecastObserver> = Arc::new(LogObserver);
    let provider = FallbackProvider::new(
        Arc::new(client),
        SyntheticForecast::from_os_rng(),
        clock.clone(),
        observer.clone(),
    );

    Ok(ForecastService::new(
        CityRegistry::default(),
        ForecastCache::default(),
        Arc::new(provider),
        clock,
        observer,
    ))
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    env_logger::init();

    let args = Args::parse();

    let state = AppState {
        forecasts: create_forecast_service(&args)?,
    };
    let app = create_app(state, args.assets_path.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    log::info!("listening on {}", addr);
    log::info!("upstream forecasts from {}", args.upstream_url);

    match (args.key_file_path, args.cert_file_path) {
        (Some(key_file_path), Some(cert_file_path)) => {
            log::info!(
                "using tls with key file {} and cert file {}",
                key_file_path.display(),
                cert_file_path.display()
            );
            let tls = RustlsConfig::from_pem_file(cert_file_path, key_file_path).await?;
            axum_server::bind_rustls(addr, tls)
                .serve(ServiceExt::<Request>::into_make_service(app))
                .await?;
        }
        (Some(_), None) => return Err(ServerError::MissingCertificate),
        _ => {
            axum_server::bind(addr)
                .serve(ServiceExt::<Request>::into_make_service(app))
                .await?;
        }
    }
    Ok(())
}
