pub mod pages;
pub mod registration;
pub mod student;

use axum::{Json, Router, routing::get};

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(registration::router())
        .nest("/students", student::router())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
