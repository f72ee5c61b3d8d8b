use axum::response::IntoResponse;
use crate::error::AppError;

pub async fn page_not_found_handler() -> impl IntoResponse {
    AppError::NotFound("Oops looks like you landed at the wrong endpoint".to_string())
}
