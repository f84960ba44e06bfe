use super::PullRequest;
use crate::{
    engine,
    error::Result,
    extractors::{Json, ValidatedJson},
    utils::trimmed,
    StateTrait,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    pull_request_id: String,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pr: PullRequest,
}

pub async fn merge_pull_request<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let pr = engine::pull_request::merge(state.db(), &request.pull_request_id).await?;

    Ok(Json(Response { pr: pr.into() }))
}
