use axum::extract::Json;
use axum::{Router, routing::get};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const HEALTH_MESSAGE: &str = "Serveur météo Tchad - Meteo Concept API";

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

pub fn routes() -> Router {
    Router::new().route("/", get(get_health))
}

async fn get_health() -> Json<Health> {
    Json(Health {
        status: "OK".to_string(),
        message: HEALTH_MESSAGE.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{self, Request, StatusCode},
    };
    use chrono::DateTime;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_get_health() {
        let response = routes()
            .oneshot(
                Request::builder()
                    .method(http::Method::GET)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let health: Health = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "OK");
        assert_eq!(health.message, HEALTH_MESSAGE);
        assert!(health.timestamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
    }
}
