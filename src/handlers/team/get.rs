use super::Team;
use crate::{
    engine,
    error::Result,
    extractors::{Json, ValidatedQuery},
    utils::trimmed,
    StateTrait,
};
use axum::extract::State;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Params {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    team_name: String,
}

pub async fn get_team<S: StateTrait>(
    State(state): State<S>,
    ValidatedQuery(params): ValidatedQuery<Params>,
) -> Result<Json<Team>> {
    let team = engine::team::get(state.db(), &params.team_name).await?;

    Ok(Json(team.into()))
}
