use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::service::CityNotFound;

/// JSON body of every error response.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: &str) -> ErrorBody {
        ErrorBody {
            error: message.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Ville non trouvée")]
    CityNotFound,
    #[error("Route non trouvée")]
    RouteNotFound,
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> ApiError {
        ApiError::Internal {
            message: message.into(),
        }
    }
}

impl From<CityNotFound> for ApiError {
    fn from(_: CityNotFound) -> Self {
        ApiError::CityNotFound
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::CityNotFound | ApiError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody::new(&self.to_string())),
            )
                .into_response(),
            ApiError::Internal { message } => {
                // The details stay in the log, clients get a fixed message.
                error!("Error encountered while processing request: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new(
                        "Erreur lors de la récupération des données météo",
                    )),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("could not set up http client: {source}")]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },
    #[error("could not serve: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("a key file was given without a certificate file")]
    MissingCertificate,
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
