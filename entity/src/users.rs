use super::teams;
use sea_orm::{entity::prelude::*, QueryOrder};

pub mod constraints {
    pub const PK_USERS: &str = "PK_users";
    pub const FK_USERS_TEAM: &str = "FK_users_team";
    pub const IDX_USERS_TEAM_ACTIVE: &str = "IDX_users_team_active";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub team: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Team,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Team => Entity::belongs_to(teams::Entity)
                .from(Column::Team)
                .to(teams::Column::Name)
                .into(),
        }
    }
}

impl Related<teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_in_team(team: &str) -> Select<Entity> {
        Self::find()
            .filter(Column::Team.eq(team))
            .order_by_asc(Column::Id)
    }

    /// Active members of `team` in ascending id order.
    #[inline]
    pub fn find_active_in_team(team: &str) -> Select<Entity> {
        Self::find_in_team(team).filter(Column::IsActive.eq(true))
    }
}
