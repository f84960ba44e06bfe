pub use sea_orm_migration::prelude::*;

mod m20251106_101500_create_teams_table;
mod m20251106_101600_create_users_table;
mod m20251106_101700_create_pull_requests_table;
mod m20251106_101800_create_pull_request_reviewers_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251106_101500_create_teams_table::Migration),
            Box::new(m20251106_101600_create_users_table::Migration),
            Box::new(m20251106_101700_create_pull_requests_table::Migration),
            Box::new(m20251106_101800_create_pull_request_reviewers_table::Migration),
        ]
    }
}
