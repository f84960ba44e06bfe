mod pull_request;
mod team;
mod users;

use crate::{extractors::Json, state::StateTrait, Result};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use sea_orm::ConnectionTrait;
use serde_json::{json, Value};
use std::collections::HashSet;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .nest("/team", team::routes::<S>())
        .nest("/users", users::routes::<S>())
        .nest("/pullRequest", pull_request::routes::<S>())
        .route("/health", get(health::<S>))
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn health<S: StateTrait>(State(state): State<S>) -> Result<Json<Value>> {
    state.db().execute_unprepared("select 1").await?;

    Ok(Json(json!({ "health": "ok" })))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if state.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}

fn has_duplicates<'a>(ids: impl IntoIterator<Item = &'a str>) -> bool {
    let mut seen = HashSet::new();
    ids.into_iter().any(|id| !seen.insert(id))
}

#[cfg(test)]
mod tests {
    use super::has_duplicates;

    #[test]
    fn detects_duplicate_ids() {
        assert!(has_duplicates(["u1", "u2", "u1"]));
        assert!(!has_duplicates(["u1", "u2", "u3"]));
        assert!(!has_duplicates([]));
    }
}
