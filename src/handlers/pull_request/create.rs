use super::PullRequest;
use crate::{
    engine,
    error::{self, Result},
    extractors::{Json, ValidatedJson},
    utils::trimmed,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    pull_request_id: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    pull_request_name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    author_id: String,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pr: PullRequest,
}

pub async fn create_pull_request<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let pr = engine::pull_request::create(
        state.db(),
        &request.pull_request_id,
        &request.pull_request_name,
        &request.author_id,
    )
    .await
    .map_err(|err| match err {
        engine::Error::AlreadyExists => error::PR_EXISTS,
        err => err.into(),
    })?;

    Ok((StatusCode::CREATED, Json(Response { pr: pr.into() })))
}
