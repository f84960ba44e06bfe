use super::{pull_requests, users};
use sea_orm::{entity::prelude::*, QueryOrder};

pub mod constraints {
    pub const PK_PULL_REQUEST_REVIEWERS: &str = "PK_pull_request_reviewers";
    pub const FK_PULL_REQUEST_REVIEWERS_PR_ID: &str = "FK_pull_request_reviewers_pr_id";
    pub const FK_PULL_REQUEST_REVIEWERS_REVIEWER_ID: &str =
        "FK_pull_request_reviewers_reviewer_id";
    pub const IDX_PULL_REQUEST_REVIEWERS_REVIEWER: &str = "IDX_pull_request_reviewers_reviewer";
}

/// At most two rows exist per pull request; the author never appears.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pull_request_reviewers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pr_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub reviewer_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PullRequest,
    Reviewer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::PullRequest => Entity::belongs_to(pull_requests::Entity)
                .from(Column::PrId)
                .to(pull_requests::Column::Id)
                .into(),
            Self::Reviewer => Entity::belongs_to(users::Entity)
                .from(Column::ReviewerId)
                .to(users::Column::Id)
                .into(),
        }
    }
}

impl Related<pull_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PullRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_for_pull_request(pr_id: &str) -> Select<Entity> {
        Self::find()
            .filter(Column::PrId.eq(pr_id))
            .order_by_asc(Column::ReviewerId)
    }

    #[inline]
    pub fn find_for_reviewer(reviewer_id: &str) -> Select<Entity> {
        Self::find().filter(Column::ReviewerId.eq(reviewer_id))
    }
}
