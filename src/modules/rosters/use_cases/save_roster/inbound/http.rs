use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::rosters::core::notification_outcome::NotificationOutcome;
use crate::modules::rosters::core::roster::{Roster, RosterStatus};
use crate::modules::rosters::use_cases::errors::ApplicationError;
use crate::modules::rosters::use_cases::save_roster::command::{AssignmentInput, SaveRoster};
use crate::shell::actor::actor_from_headers;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SaveRosterBody {
    pub week_start: NaiveDate,
    #[serde(default)]
    pub status: RosterStatus,
    #[serde(default)]
    pub assignments: Vec<AssignmentInput>,
    #[serde(default)]
    pub roster_id: Option<String>,
}

#[derive(Serialize, Default)]
pub struct SaveRosterResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster: Option<Roster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn failure(status: StatusCode, error: impl ToString) -> axum::response::Response {
    let body = SaveRosterResponse {
        error: Some(error.to_string()),
        ..SaveRosterResponse::default()
    };
    (status, Json(body)).into_response()
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<SaveRosterBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return failure(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
    };

    let command = SaveRoster {
        week_start: body.week_start,
        status: body.status,
        assignments: body.assignments,
        roster_id: body.roster_id,
        actor: actor_from_headers(&headers),
        requested_at: Utc::now().timestamp_millis(),
    };

    match state.save_handler.handle(command).await {
        Ok(outcome) => Json(SaveRosterResponse {
            success: true,
            roster: Some(outcome.roster),
            notifications: outcome.notifications,
            error: None,
        })
        .into_response(),
        Err(err @ ApplicationError::Unauthenticated) => failure(StatusCode::UNAUTHORIZED, err),
        Err(err @ ApplicationError::Domain(_)) => failure(StatusCode::UNPROCESSABLE_ENTITY, err),
        Err(err) => failure(StatusCode::INTERNAL_SERVER_ERROR, err),
    }
}
