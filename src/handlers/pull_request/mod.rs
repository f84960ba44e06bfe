mod create;
mod merge;
mod reassign;

use crate::{engine, state::StateTrait};
use axum::{routing::post, Router};
use chrono::{DateTime, Utc};
use entity::pull_requests::Status;
use serde::Serialize;

/// Routes for the pull request lifecycle
///
/// POST /pullRequest/create
/// POST /pullRequest/merge
/// POST /pullRequest/reassign
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/create", post(create::create_pull_request::<S>))
        .route("/merge", post(merge::merge_pull_request::<S>))
        .route("/reassign", post(reassign::reassign_reviewer::<S>))
}

#[derive(Debug, Serialize)]
pub struct PullRequest {
    pull_request_id: String,
    pull_request_name: String,
    author_id: String,
    status: Status,
    assigned_reviewers: Vec<String>,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
    #[serde(rename = "mergedAt")]
    merged_at: Option<DateTime<Utc>>,
}

impl From<engine::PullRequest> for PullRequest {
    fn from(pr: engine::PullRequest) -> Self {
        Self {
            pull_request_id: pr.id,
            pull_request_name: pr.name,
            author_id: pr.author_id,
            status: pr.status,
            assigned_reviewers: pr.reviewers,
            created_at: pr.created_at,
            merged_at: pr.merged_at,
        }
    }
}
