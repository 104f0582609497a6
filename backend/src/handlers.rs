use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::error::AppError;
use crate::state::AppState;

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn get_vocabulary(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state.vocabulary.body()?.to_owned();
    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        body,
    ))
}
