use crate::{
    engine::{self, PullRequestShort},
    error::Result,
    extractors::{Json, ValidatedQuery},
    utils::trimmed,
    StateTrait,
};
use axum::extract::State;
use entity::pull_requests::Status;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Params {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    user_id: String,
}

#[derive(Debug, Serialize)]
pub struct PullRequest {
    pull_request_id: String,
    pull_request_name: String,
    author_id: String,
    status: Status,
}

impl From<PullRequestShort> for PullRequest {
    fn from(pr: PullRequestShort) -> Self {
        Self {
            pull_request_id: pr.id,
            pull_request_name: pr.name,
            author_id: pr.author_id,
            status: pr.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Response {
    user_id: String,
    pull_requests: Vec<PullRequest>,
}

pub async fn get_review<S: StateTrait>(
    State(state): State<S>,
    ValidatedQuery(params): ValidatedQuery<Params>,
) -> Result<Json<Response>> {
    let queue = engine::user::review_queue(state.db(), &params.user_id).await?;

    Ok(Json(Response {
        user_id: params.user_id,
        pull_requests: queue.into_iter().map(Into::into).collect(),
    }))
}
