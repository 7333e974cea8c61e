use axum::{
    Json,
    extract::Query,
    extract::State,
    extract::rejection::QueryRejection,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::rosters::core::driver::Driver;
use crate::modules::rosters::core::roster::Roster;
use crate::modules::rosters::use_cases::errors::ApplicationError;
use crate::modules::rosters::use_cases::load_roster_for_week::handler::LoadRosterForWeek;
use crate::shell::actor::actor_from_headers;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RosterForWeekParams {
    pub week_start: NaiveDate,
}

#[derive(Serialize, Default)]
pub struct RosterForWeekResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster: Option<Roster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drivers: Option<Vec<Driver>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn failure(status: StatusCode, error: impl ToString) -> axum::response::Response {
    let body = RosterForWeekResponse {
        error: Some(error.to_string()),
        ..RosterForWeekResponse::default()
    };
    (status, Json(body)).into_response()
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<RosterForWeekParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return failure(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
    };

    let query = LoadRosterForWeek {
        week_start: params.week_start,
        actor: actor_from_headers(&headers),
    };

    match state.load_handler.handle(query).await {
        Ok(loaded) => Json(RosterForWeekResponse {
            success: true,
            roster: Some(loaded.roster),
            drivers: Some(loaded.drivers),
            error: None,
        })
        .into_response(),
        Err(err @ ApplicationError::Unauthenticated) => failure(StatusCode::UNAUTHORIZED, err),
        Err(err) => failure(StatusCode::INTERNAL_SERVER_ERROR, err),
    }
}
