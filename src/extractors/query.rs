use crate::{error, Error};
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query string extractor with the same error mapping as [`super::ValidatedJson`].
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!("rejected query string: {rejection}");
                error::INVALID_QUERY
            })?;

        query.validate().map_err(|_| error::INVALID_QUERY)?;

        Ok(ValidatedQuery(query))
    }
}
