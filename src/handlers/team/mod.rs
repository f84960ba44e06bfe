mod add;
mod deactivate;
mod get;

use crate::{engine, state::StateTrait, utils::trimmed};
use axum::{
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Routes for team management
///
/// POST /team/add
/// GET  /team/get?team_name=
/// POST /team/deactivateMembers
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/add", post(add::add_team::<S>))
        .route("/get", get(get::get_team::<S>))
        .route(
            "/deactivateMembers",
            post(deactivate::deactivate_members::<S>),
        )
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct Member {
    #[serde(rename = "user_id", deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    id: String,
    #[serde(rename = "username", deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    name: String,
    is_active: bool,
}

impl From<Member> for engine::Member {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            is_active: member.is_active,
        }
    }
}

impl From<engine::Member> for Member {
    fn from(member: engine::Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            is_active: member.is_active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Team {
    team_name: String,
    members: Vec<Member>,
}

impl From<engine::Team> for Team {
    fn from(team: engine::Team) -> Self {
        Self {
            team_name: team.name,
            members: team.members.into_iter().map(Member::from).collect(),
        }
    }
}
