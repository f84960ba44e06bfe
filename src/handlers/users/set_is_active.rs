use crate::{
    engine,
    error::Result,
    extractors::{Json, ValidatedJson},
    utils::trimmed,
    StateTrait,
};
use axum::extract::State;
use entity::users;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    user_id: String,
    is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct User {
    user_id: String,
    username: String,
    team_name: String,
    is_active: bool,
}

impl From<users::Model> for User {
    fn from(user: users::Model) -> Self {
        Self {
            user_id: user.id,
            username: user.name,
            team_name: user.team,
            is_active: user.is_active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Response {
    user: User,
}

pub async fn set_is_active<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let user = engine::user::set_active(state.db(), &request.user_id, request.is_active).await?;

    Ok(Json(Response { user: user.into() }))
}
