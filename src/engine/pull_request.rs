use super::{
    selection::{self, CREATE_LIMIT, REASSIGN_LIMIT},
    Error, Result,
};
use crate::error::DatabaseError;
use chrono::{DateTime, Utc};
use entity::{
    pull_request_reviewers,
    pull_requests::{self, constraints::*, Status},
    users,
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait, IntoActiveModel,
    QuerySelect, Set, TransactionTrait,
};

/// A pull request together with its current reviewers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub status: Status,
    pub reviewers: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    fn new(model: pull_requests::Model, reviewers: Vec<String>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            author_id: model.author_id,
            status: model.status,
            reviewers,
            created_at: model.created_at,
            merged_at: model.merged_at,
        }
    }
}

/// Loads a pull request and holds an exclusive lock on its row until `txn`
/// commits or rolls back.
pub async fn lock_pull_request(
    txn: &DatabaseTransaction,
    id: &str,
) -> std::result::Result<Option<pull_requests::Model>, DbErr> {
    pull_requests::Entity::find_by_id(id)
        .lock_exclusive()
        .one(txn)
        .await
}

/// Current reviewers of a pull request in ascending id order.
pub async fn reviewers_of<C: ConnectionTrait>(
    conn: &C,
    pr_id: &str,
) -> std::result::Result<Vec<String>, DbErr> {
    pull_request_reviewers::Entity::find_for_pull_request(pr_id)
        .select_only()
        .column(pull_request_reviewers::Column::ReviewerId)
        .into_tuple::<String>()
        .all(conn)
        .await
}

async fn insert_reviewer(
    txn: &DatabaseTransaction,
    pr_id: &str,
    reviewer_id: &str,
) -> std::result::Result<(), DbErr> {
    pull_request_reviewers::Entity::insert(pull_request_reviewers::ActiveModel {
        pr_id: Set(pr_id.to_owned()),
        reviewer_id: Set(reviewer_id.to_owned()),
    })
    .exec_without_returning(txn)
    .await?;

    Ok(())
}

/// Opens a pull request and assigns up to two active teammates of the author.
pub async fn create<D>(db: &D, id: &str, name: &str, author_id: &str) -> Result<PullRequest>
where
    D: TransactionTrait,
{
    let txn = db.begin().await?;

    let author = users::Entity::find_by_id(author_id)
        .one(&txn)
        .await?
        .filter(|author| author.is_active)
        .ok_or(Error::NotFound)?;

    let model = pull_requests::ActiveModel {
        id: Set(id.to_owned()),
        name: Set(name.to_owned()),
        author_id: Set(author.id.clone()),
        status: Set(Status::Open),
        created_at: Set(Utc::now()),
        merged_at: Set(None),
    };

    let model = match model.insert(&txn).await {
        Err(err) if err.unique_violation(PK_PULL_REQUESTS) => return Err(Error::AlreadyExists),
        r => r?,
    };

    let reviewers =
        selection::select_candidates(&txn, &author.team, &[&author.id], &[], CREATE_LIMIT)
            .await?;

    for reviewer in &reviewers {
        insert_reviewer(&txn, id, reviewer).await?;
    }

    txn.commit().await?;

    info!(
        "created pull request {id} by {author_id}, reviewers: {:?}",
        reviewers
    );

    Ok(PullRequest::new(model, reviewers))
}

/// Marks a pull request as merged.
///
/// Merging an already merged pull request returns it unchanged, keeping the
/// original `merged_at`.
pub async fn merge<D>(db: &D, id: &str) -> Result<PullRequest>
where
    D: TransactionTrait,
{
    let txn = db.begin().await?;

    let model = lock_pull_request(&txn, id)
        .await?
        .ok_or(Error::NotFound)?;

    let model = if model.status == Status::Merged {
        debug!("pull request {id} is already merged");
        model
    } else {
        let mut active_model = model.into_active_model();
        active_model.status = Set(Status::Merged);
        active_model.merged_at = Set(Some(Utc::now()));

        let model = active_model.update(&txn).await?;
        info!("merged pull request {id}");
        model
    };

    let reviewers = reviewers_of(&txn, id).await?;

    txn.commit().await?;

    Ok(PullRequest::new(model, reviewers))
}

/// Replaces `old_reviewer_id` on an open pull request with the next eligible
/// member of the old reviewer's team. Returns the refreshed pull request and
/// the id of the new reviewer.
pub async fn reassign<D>(db: &D, pr_id: &str, old_reviewer_id: &str) -> Result<(PullRequest, String)>
where
    D: TransactionTrait,
{
    let txn = db.begin().await?;

    let model = lock_pull_request(&txn, pr_id)
        .await?
        .ok_or(Error::NotFound)?;

    if model.status == Status::Merged {
        return Err(Error::PullRequestMerged);
    }

    let old_reviewer = users::Entity::find_by_id(old_reviewer_id)
        .one(&txn)
        .await?
        .ok_or(Error::NotFound)?;

    let current = reviewers_of(&txn, pr_id).await?;

    if !current.iter().any(|reviewer| reviewer == old_reviewer_id) {
        return Err(Error::NotAssigned);
    }

    let assigned: Vec<&str> = current.iter().map(String::as_str).collect();

    let new_reviewer_id = selection::select_candidates(
        &txn,
        &old_reviewer.team,
        &[&model.author_id, old_reviewer_id],
        &assigned,
        REASSIGN_LIMIT,
    )
    .await?
    .into_iter()
    .next()
    .ok_or(Error::NoCandidate)?;

    pull_request_reviewers::Entity::delete_by_id((pr_id.to_owned(), old_reviewer_id.to_owned()))
        .exec(&txn)
        .await?;

    insert_reviewer(&txn, pr_id, &new_reviewer_id).await?;

    let reviewers = reviewers_of(&txn, pr_id).await?;

    txn.commit().await?;

    info!("reassigned pull request {pr_id}: {old_reviewer_id} -> {new_reviewer_id}");

    Ok((PullRequest::new(model, reviewers), new_reviewer_id))
}
