mod config;
mod error;
mod handlers;
mod logging;
mod state;

use std::path::Path;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use crate::config::Config;
use crate::handlers::{get_vocabulary, health_check};
use crate::state::{AppState, VocabularyFile};

/// Health, the default vocabulary, then the frontend bundle with an
/// `index.html` fallback for every other path.
fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS]);

    let static_service = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));
    let static_service = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache"),
    )
    .layer(static_service);

    Router::new()
        .route("/health", get(health_check))
        .route("/vocab.json", get(get_vocabulary))
        .fallback_service(static_service)
        .layer(cors)
        .layer(middleware::from_fn(logging::log_requests))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::setup()?;

    let config = Config::from_env()?;
    info!(
        "Serving {} with vocabulary {}",
        config.static_dir.display(),
        config.vocab_path.display()
    );

    let vocabulary = VocabularyFile::load(&config.vocab_path).await;
    let app = build_router(AppState::new(vocabulary), &config.static_dir);

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::path::PathBuf;
    use tower::ServiceExt;

    const VOCAB: &str = r#"[{"category": "Animals", "words": [{"term": "OTTER", "hint": "Floats on its back"}]}]"#;

    fn static_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wheel-backend-{}-{}", std::process::id(), name));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>wheel of fortune</html>").unwrap();
        dir
    }

    async fn get_path(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(AppState::new(VocabularyFile::from_text(VOCAB)), &static_dir("health"));
        let (status, body) = get_path(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_vocabulary_is_served() {
        let app = build_router(AppState::new(VocabularyFile::from_text(VOCAB)), &static_dir("vocab"));
        let (status, body) = get_path(app, "/vocab.json?t=1700000000").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value[0]["words"][0]["term"], "OTTER");
    }

    #[tokio::test]
    async fn test_missing_vocabulary_is_not_found() {
        let app = build_router(
            AppState::new(VocabularyFile::Unavailable("gone".into())),
            &static_dir("missing"),
        );
        let (status, body) = get_path(app, "/vocab.json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("\"error\""));
    }

    #[tokio::test]
    async fn test_invalid_vocabulary_is_server_error() {
        let app = build_router(AppState::new(VocabularyFile::from_text("[]")), &static_dir("invalid"));
        let (status, _) = get_path(app, "/vocab.json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unknown_paths_fall_back_to_index() {
        let app = build_router(AppState::new(VocabularyFile::from_text(VOCAB)), &static_dir("fallback"));
        let (status, body) = get_path(app, "/some/client/route").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("wheel of fortune"));
    }
}
