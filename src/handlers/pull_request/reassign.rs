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
    #[serde(alias = "old_reviewer_id", deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    old_user_id: String,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pr: PullRequest,
    replaced_by: String,
}

pub async fn reassign_reviewer<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let (pr, replaced_by) =
        engine::pull_request::reassign(state.db(), &request.pull_request_id, &request.old_user_id)
            .await?;

    Ok(Json(Response {
        pr: pr.into(),
        replaced_by,
    }))
}
