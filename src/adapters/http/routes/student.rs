use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState, app_error::AppResult,
    domain::entities::student::Student,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(get_student))
}

async fn get_student(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Student>> {
    let student = app_state.registration_use_cases.get_student(id).await?;
    Ok(Json(student))
}
