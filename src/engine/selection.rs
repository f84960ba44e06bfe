//! Deterministic reviewer selection.

use entity::users;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QuerySelect};

/// Number of reviewers picked for a new pull request.
pub const CREATE_LIMIT: usize = 2;
/// Number of reviewers picked to replace one reviewer.
pub const REASSIGN_LIMIT: usize = 1;

/// Returns up to `limit` ids from `pool` that are neither excluded nor already
/// assigned, in ascending (byte-wise lexicographic) order.
pub fn pick<I>(pool: I, exclude: &[&str], already_assigned: &[&str], limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut candidates: Vec<String> = pool
        .into_iter()
        .filter(|id| !exclude.contains(&id.as_str()) && !already_assigned.contains(&id.as_str()))
        .collect();

    candidates.sort_unstable();
    candidates.dedup();
    candidates.truncate(limit);

    candidates
}

/// Selects candidates among the active members of `team`.
///
/// Returning fewer than `limit` ids (or none at all) is not an error, the
/// caller decides whether that is acceptable.
pub async fn select_candidates<C>(
    conn: &C,
    team: &str,
    exclude: &[&str],
    already_assigned: &[&str],
    limit: usize,
) -> Result<Vec<String>, DbErr>
where
    C: ConnectionTrait,
{
    let pool = users::Entity::find_active_in_team(team)
        .select_only()
        .column(users::Column::Id)
        .into_tuple::<String>()
        .all(conn)
        .await?;

    let candidates = pick(pool, exclude, already_assigned, limit);
    trace!("candidates in team {team}: {candidates:?}");

    Ok(candidates)
}
