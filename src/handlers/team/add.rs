use super::{Member, Team};
use crate::{
    engine,
    error::{self, Result},
    extractors::{Json, ValidatedJson},
    handlers::has_duplicates,
    utils::trimmed,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    team_name: String,
    #[validate(length(min = 1))]
    members: Vec<Member>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    team: Team,
}

pub async fn add_team<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    for member in &request.members {
        member.validate().map_err(|_| error::INVALID_DATA)?;
    }

    if has_duplicates(request.members.iter().map(|member| member.id.as_str())) {
        return Err(error::DUPLICATE_MEMBER);
    }

    let team = engine::Team {
        name: request.team_name,
        members: request.members.into_iter().map(Into::into).collect(),
    };

    let team = engine::team::add(state.db(), &team)
        .await
        .map_err(|err| match err {
            engine::Error::AlreadyExists => error::TEAM_EXISTS,
            err => err.into(),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(Response { team: team.into() }),
    ))
}
