use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::rosters::core::diff::Change;
use crate::modules::rosters::use_cases::errors::ApplicationError;
use crate::modules::rosters::use_cases::preview_roster_changes::handler::PreviewRosterChanges;
use crate::modules::rosters::use_cases::save_roster::command::AssignmentInput;
use crate::shell::actor::actor_from_headers;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PreviewRosterChangesBody {
    pub week_start: NaiveDate,
    #[serde(default)]
    pub assignments: Vec<AssignmentInput>,
}

#[derive(Serialize, Default)]
pub struct PreviewRosterChangesResponse {
    pub success: bool,
    pub changes: Vec<Change>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn failure(status: StatusCode, error: impl ToString) -> axum::response::Response {
    let body = PreviewRosterChangesResponse {
        error: Some(error.to_string()),
        ..PreviewRosterChangesResponse::default()
    };
    (status, Json(body)).into_response()
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<PreviewRosterChangesBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return failure(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
    };

    let query = PreviewRosterChanges {
        week_start: body.week_start,
        assignments: body.assignments,
        actor: actor_from_headers(&headers),
    };

    match state.preview_handler.handle(query).await {
        Ok(changes) => Json(PreviewRosterChangesResponse {
            success: true,
            changes,
            error: None,
        })
        .into_response(),
        Err(err @ ApplicationError::Unauthenticated) => failure(StatusCode::UNAUTHORIZED, err),
        Err(err) => failure(StatusCode::INTERNAL_SERVER_ERROR, err),
    }
}
