use axum::extract::{Json, State};
use axum::{Router, routing::get};

use crate::app::AppState;
use crate::models::city::CitySummary;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_cities))
        .with_state(state)
}

async fn get_cities(State(state): State<AppState>) -> Json<Vec<CitySummary>> {
    Json(state.forecasts.list_cities())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::app::test_app::create_test_state;
    use crate::models::provider::test_source::FakeSource;
    use axum::{
        body::{Body, to_bytes},
        http::{self, Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_get_cities() {
        let (state, _harness) = create_test_state(Arc::new(FakeSource::succeeding()));
        let app = routes(state);

        let response = app
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
        assert_eq!(
            response.headers()[http::header::CONTENT_TYPE],
            mime::APPLICATION_JSON.as_ref()
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let cities: Vec<CitySummary> = serde_json::from_slice(&body).unwrap();
        assert_eq!(cities.len(), 10);
        assert_eq!(cities[0].name, "N'Djamena");
        assert_eq!(cities[9].id, 10);
    }
}
