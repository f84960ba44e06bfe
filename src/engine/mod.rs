//! Reviewer assignment engine.
//!
//! Every operation runs inside its own database transaction and either
//! commits completely or leaves the store untouched. Callers cancel an
//! operation by dropping its future; the open [`sea_orm::DatabaseTransaction`]
//! is rolled back when it is dropped.
//!
//! The one exception is [`team::deactivate_members`], which reassigns each
//! affected pull request in its own transaction before deactivating the
//! users.

mod error;
pub mod pull_request;
pub mod selection;
pub mod team;
pub mod user;

pub use error::*;
pub use pull_request::PullRequest;
pub use team::{Member, Team};
pub use user::PullRequestShort;
