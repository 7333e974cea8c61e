use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.drivers.list_active_drivers().await {
        Ok(drivers) => Json(drivers).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "listing active drivers failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
