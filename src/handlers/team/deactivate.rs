use crate::{
    engine,
    error::{self, Result},
    extractors::{Json, ValidatedJson},
    handlers::has_duplicates,
    utils::{trimmed, trimmed_vec},
    StateTrait,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    team_name: String,
    #[serde(deserialize_with = "trimmed_vec")]
    #[validate(length(min = 1))]
    user_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    team_name: String,
    deactivated_user_ids: Vec<String>,
}

pub async fn deactivate_members<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    if request.user_ids.iter().any(String::is_empty) {
        return Err(error::INVALID_DATA);
    }

    if has_duplicates(request.user_ids.iter().map(String::as_str)) {
        return Err(error::DUPLICATE_USER_ID);
    }

    let deactivated =
        engine::team::deactivate_members(state.db(), &request.team_name, &request.user_ids)
            .await?;

    Ok(Json(Response {
        team_name: request.team_name,
        deactivated_user_ids: deactivated,
    }))
}
