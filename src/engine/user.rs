use super::{Error, Result};
use entity::{
    pull_request_reviewers,
    pull_requests::{self, Status},
    users,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

/// A pull request as listed in a reviewer's queue.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct PullRequestShort {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub status: Status,
}

/// Sets the activity flag of a single user. Existing assignments are left
/// alone; only [`super::team::deactivate_members`] cascades.
pub async fn set_active<D>(db: &D, user_id: &str, is_active: bool) -> Result<users::Model>
where
    D: TransactionTrait,
{
    let txn = db.begin().await?;

    let user = users::Entity::find_by_id(user_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(Error::NotFound)?;

    let user = if user.is_active == is_active {
        user
    } else {
        let mut active_model = user.into_active_model();
        active_model.is_active = Set(is_active);
        active_model.update(&txn).await?
    };

    txn.commit().await?;

    info!("set is_active={is_active} for user {user_id}");

    Ok(user)
}

/// Every pull request `user_id` is assigned to review, oldest first.
pub async fn review_queue<C>(conn: &C, user_id: &str) -> Result<Vec<PullRequestShort>>
where
    C: ConnectionTrait,
{
    let queue = pull_requests::Entity::find()
        .select_only()
        .column(pull_requests::Column::Id)
        .column(pull_requests::Column::Name)
        .column(pull_requests::Column::AuthorId)
        .column(pull_requests::Column::Status)
        .inner_join(pull_request_reviewers::Entity)
        .filter(pull_request_reviewers::Column::ReviewerId.eq(user_id))
        .order_by_asc(pull_requests::Column::CreatedAt)
        .order_by_asc(pull_requests::Column::Id)
        .into_model::<PullRequestShort>()
        .all(conn)
        .await?;

    if queue.is_empty() && users::Entity::find_by_id(user_id).one(conn).await?.is_none() {
        return Err(Error::NotFound);
    }

    Ok(queue)
}
