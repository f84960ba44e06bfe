#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{
    request::*,
    response::*,
    setup::{setup, Env},
};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use http::StatusCode;
pub use reviewer_assigner::error;
pub use serde_json::{json, Value};
