use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::rosters::use_cases::list_active_drivers::inbound::http as drivers_http;
use crate::modules::rosters::use_cases::load_roster_for_week::inbound::http as load_http;
use crate::modules::rosters::use_cases::preview_roster_changes::inbound::http as preview_http;
use crate::modules::rosters::use_cases::save_roster::inbound::http as save_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/rosters", get(load_http::handle))
        .route("/rosters/save", post(save_http::handle))
        .route("/rosters/preview", post(preview_http::handle))
        .route("/drivers", get(drivers_http::handle))
        .with_state(state)
}
