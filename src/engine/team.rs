use super::{pull_request, Error, Result};
use crate::error::DatabaseError;
use entity::{
    pull_request_reviewers,
    pull_requests::{self, Status},
    teams::{self, constraints::*},
    users,
};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub is_active: bool,
}

impl From<users::Model> for Member {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            is_active: user.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub members: Vec<Member>,
}

/// Creates a team and upserts its members in one transaction.
///
/// Members that already exist under another team are moved into this one and
/// their name and activity flag are overwritten. Nothing is written when the
/// team already exists.
pub async fn add<D>(db: &D, team: &Team) -> Result<Team>
where
    D: TransactionTrait,
{
    let txn = db.begin().await?;

    let result = teams::Entity::insert(teams::ActiveModel {
        name: Set(team.name.clone()),
    })
    .exec_without_returning(&txn)
    .await;

    match result {
        Err(err) if err.unique_violation(PK_TEAMS) => return Err(Error::AlreadyExists),
        r => r?,
    };

    for member in &team.members {
        users::Entity::insert(users::ActiveModel {
            id: Set(member.id.clone()),
            name: Set(member.name.clone()),
            team: Set(team.name.clone()),
            is_active: Set(member.is_active),
        })
        .on_conflict(
            OnConflict::column(users::Column::Id)
                .update_columns([
                    users::Column::Name,
                    users::Column::Team,
                    users::Column::IsActive,
                ])
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;
    }

    let members = users::Entity::find_in_team(&team.name).all(&txn).await?;

    txn.commit().await?;

    info!("added team {} with {} members", team.name, members.len());

    Ok(Team {
        name: team.name.clone(),
        members: members.into_iter().map(Member::from).collect(),
    })
}

/// Returns the members of a team. A team without members is returned with an
/// empty list, a team that was never created is [`Error::NotFound`].
pub async fn get<C>(conn: &C, name: &str) -> Result<Team>
where
    C: ConnectionTrait,
{
    let members = users::Entity::find_in_team(name).all(conn).await?;

    if members.is_empty() && teams::Entity::find_by_id(name).one(conn).await?.is_none() {
        return Err(Error::NotFound);
    }

    Ok(Team {
        name: name.to_owned(),
        members: members.into_iter().map(Member::from).collect(),
    })
}

/// Ids of the open pull requests `reviewer_id` is currently assigned to.
pub async fn open_assignments<C>(conn: &C, reviewer_id: &str) -> std::result::Result<Vec<String>, DbErr>
where
    C: ConnectionTrait,
{
    pull_request_reviewers::Entity::find_for_reviewer(reviewer_id)
        .select_only()
        .column(pull_request_reviewers::Column::PrId)
        .inner_join(pull_requests::Entity)
        .filter(pull_requests::Column::Status.eq(Status::Open))
        .order_by_asc(pull_request_reviewers::Column::PrId)
        .into_tuple::<String>()
        .all(conn)
        .await
}

/// Hands every open review of `user_ids` to another teammate, then marks the
/// users inactive.
///
/// Each pull request is reassigned in its own transaction and the
/// deactivation runs in a final one. When a reassignment fails the call
/// returns that error, reassignments that already committed stay in place and
/// no user is deactivated. Repeating the call continues where it stopped.
///
/// Users are only marked inactive at the end, so a review taken from one user
/// of the batch can be handed to another user of the same batch, who then
/// stays assigned to it.
pub async fn deactivate_members<D>(db: &D, name: &str, user_ids: &[String]) -> Result<Vec<String>>
where
    D: ConnectionTrait + TransactionTrait,
{
    if user_ids.is_empty() {
        return Ok(Vec::new());
    }

    for user_id in user_ids {
        let pr_ids = open_assignments(db, user_id).await?;

        for pr_id in pr_ids {
            match pull_request::reassign(db, &pr_id, user_id).await {
                Ok(_) => {}
                // merged or reassigned concurrently since the assignments were listed
                Err(Error::PullRequestMerged | Error::NotAssigned) => {
                    debug!("skipping pull request {pr_id}, {user_id} no longer reviews it");
                }
                Err(error) => {
                    warn!("deactivation of {user_id} in {name} stopped at {pr_id}: {error}");
                    return Err(error);
                }
            }
        }
    }

    let txn = db.begin().await?;

    for user_id in user_ids {
        let result = users::Entity::update_many()
            .col_expr(users::Column::IsActive, Expr::value(false))
            .filter(users::Column::Id.eq(user_id.as_str()))
            .filter(users::Column::Team.eq(name))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound);
        }
    }

    txn.commit().await?;

    info!("deactivated {:?} in team {name}", user_ids);

    Ok(user_ids.to_vec())
}
