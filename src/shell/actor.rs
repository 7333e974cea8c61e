use axum::http::HeaderMap;

use crate::shared::core::actor::Actor;

pub const ACTOR_ID_HEADER: &str = "x-actor-id";
pub const ORGANIZATION_ID_HEADER: &str = "x-organization-id";

/// Authentication happens upstream; the gateway forwards the resolved actor
/// in these headers. Missing or blank headers mean no actor.
pub fn actor_from_headers(headers: &HeaderMap) -> Option<Actor> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };
    Some(Actor::new(header(ACTOR_ID_HEADER)?, header(ORGANIZATION_ID_HEADER)?))
}
