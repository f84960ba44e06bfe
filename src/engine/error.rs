use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The referenced user, team or pull request does not exist.
    #[error("resource not found")]
    NotFound,
    /// A pull request or team with the same id already exists.
    #[error("resource already exists")]
    AlreadyExists,
    #[error("pull request is already merged")]
    PullRequestMerged,
    #[error("user is not assigned as a reviewer")]
    NotAssigned,
    #[error("no eligible replacement reviewer")]
    NoCandidate,
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

pub type Result<T> = std::result::Result<T, Error>;
