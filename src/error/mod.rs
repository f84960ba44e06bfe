mod constants;
mod db;

pub use constants::*;
pub use db::*;

use crate::engine;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use sea_orm::DbErr;
use serde_json::json;

/// Error returned to the client as `{"code": ..., "error": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    status: StatusCode,
    code: &'static str,
    message: &'static str,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    const fn new(status: StatusCode, code: &'static str, message: &'static str) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(128).writer();

        serde_json::to_writer(
            &mut buf,
            &json!({
                "code": self.code(),
                "error": self.message(),
            }),
        )
        .expect("failed to serialize error");

        buf.into_inner().freeze()
    }
}

impl IntoResponse for Error {
    #[inline]
    fn into_response(self) -> Response {
        let mut res = (self.status, self.to_bytes()).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<DbErr> for Error {
    #[inline]
    fn from(error: DbErr) -> Self {
        error!("database error: {:?}", error);
        constants::DATABASE_ERROR
    }
}

impl From<engine::Error> for Error {
    fn from(error: engine::Error) -> Self {
        match error {
            engine::Error::NotFound => constants::NOT_FOUND,
            engine::Error::AlreadyExists => constants::ALREADY_EXISTS,
            engine::Error::PullRequestMerged => constants::PR_MERGED,
            engine::Error::NotAssigned => constants::NOT_ASSIGNED,
            engine::Error::NoCandidate => constants::NO_CANDIDATE,
            engine::Error::Database(error) => error.into(),
        }
    }
}

macro_rules! const_error {
    ($name:ident, $status:ident, $code:literal, $msg:literal) => {
        pub const $name: $crate::error::Error =
            $crate::error::Error::new(::axum::http::StatusCode::$status, $code, $msg);
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_has_json_content_type() {
        let response = NOT_FOUND.into_response();
        let content_type = response.headers().get(header::CONTENT_TYPE);

        assert!(content_type.is_some(), "response");
        assert_eq!(content_type.unwrap(), "application/json");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_body_carries_code_and_message() {
        let body: serde_json::Value = serde_json::from_slice(&NO_CANDIDATE.to_bytes()).unwrap();

        assert_eq!(body["code"], "NO_CANDIDATE");
        assert_eq!(body["error"], NO_CANDIDATE.message());
    }

    #[test]
    fn engine_errors_keep_their_class() {
        assert_eq!(Error::from(engine::Error::NotFound), NOT_FOUND);
        assert_eq!(Error::from(engine::Error::AlreadyExists), ALREADY_EXISTS);
        assert_eq!(Error::from(engine::Error::PullRequestMerged), PR_MERGED);
        assert_eq!(Error::from(engine::Error::NotAssigned), NOT_ASSIGNED);
        assert_eq!(Error::from(engine::Error::NoCandidate), NO_CANDIDATE);
        assert_eq!(
            Error::from(engine::Error::Database(DbErr::Custom("boom".to_owned()))),
            DATABASE_ERROR
        );
    }
}
