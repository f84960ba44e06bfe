use super::{pull_request_reviewers, users};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_PULL_REQUESTS: &str = "PK_pull_requests";
    pub const FK_PULL_REQUESTS_AUTHOR: &str = "FK_pull_requests_author";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pull_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub status: Status,
    pub created_at: DateTimeUtc,
    pub merged_at: Option<DateTimeUtc>,
}

#[derive(
    EnumIter, DeriveActiveEnum, Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[sea_orm(string_value = "OPEN")]
    Open,
    #[sea_orm(string_value = "MERGED")]
    Merged,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Author,
    Reviewers,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Author => Entity::belongs_to(users::Entity)
                .from(Column::AuthorId)
                .to(users::Column::Id)
                .into(),
            Self::Reviewers => Entity::has_many(pull_request_reviewers::Entity).into(),
        }
    }
}

impl Related<pull_request_reviewers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviewers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
