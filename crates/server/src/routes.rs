use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{ACCEPT, CONTENT_TYPE, ETAG, ORIGIN};
use axum::http::{HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use common::NewsItem;
use pipeline::NewsPipeline;
use serde::Serialize;
use time::OffsetDateTime;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<NewsPipeline>,
    port: u16,
}

impl AppState {
    pub fn new(pipeline: NewsPipeline, port: u16) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            port,
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    port: u16,
}

pub fn router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([
            ORIGIN,
            HeaderName::from_static("x-requested-with"),
            CONTENT_TYPE,
            ACCEPT,
        ]);

    Router::new()
        .route("/health", get(health))
        .route("/api/news", get(news))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "News aggregator is running",
        port: state.port,
    })
}

async fn news(State(state): State<AppState>) -> Response {
    let pipeline = state.pipeline.clone();

    // A panic inside aggregation surfaces here as a JoinError.
    match tokio::spawn(async move { pipeline.fetch_news().await }).await {
        Ok(items) => ([(ETAG, etag_now())], Json(items)).into_response(),
        Err(e) => {
            error!("News aggregation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Vec::<NewsItem>::new()),
            )
                .into_response()
        }
    }
}

/// Current Unix time in milliseconds, quoted as an entity tag.
fn etag_now() -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    format!("\"{}\"", millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use async_trait::async_trait;
    use axum::http::Request;
    use common::{Article, Config, NewsProvider, NewsResult, ProviderChain};
    use pipeline::{sample_news, Enricher};
    use std::time::Duration;
    use tower::ServiceExt;

    struct PanickingProvider;

    #[async_trait]
    impl NewsProvider for PanickingProvider {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn budget(&self) -> usize {
            5
        }

        async fn fetch(&self) -> NewsResult<Vec<Article>> {
            panic!("upstream parser blew up");
        }
    }

    fn app() -> Router {
        let config = Config::default();
        let pipeline = NewsPipeline::from_config(&config).unwrap();
        router(AppState::new(pipeline, 4242), ".")
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "OK");
        assert_eq!(json["port"], 4242);
    }

    #[tokio::test]
    async fn test_news_without_credentials_returns_samples() {
        let response = app()
            .oneshot(Request::builder().uri("/api/news").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(ETAG));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let items: Vec<NewsItem> = serde_json::from_slice(&body).unwrap();
        assert_eq!(items, sample_news());
    }

    #[tokio::test]
    async fn test_news_failure_returns_500_with_empty_list() {
        let chain = ProviderChain::new(Duration::from_secs(1))
            .add_provider(Box::new(PanickingProvider));
        let pipeline = NewsPipeline::new(chain, Enricher::offline());
        let app = router(AppState::new(pipeline, 4242), ".");

        let response = app
            .oneshot(Request::builder().uri("/api/news").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!response.headers().contains_key(ETAG));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(ORIGIN, "https://frontend.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
    }

    #[test]
    fn test_etag_is_quoted_millis() {
        let etag = etag_now();
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert!(etag.trim_matches('"').parse::<i128>().is_ok());
    }
}
