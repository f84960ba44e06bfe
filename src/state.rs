use crate::config::Config;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::{sync::Arc, time::Duration};
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone + Send + Sync;

    fn db(&self) -> &Self::Db;
    fn request_timeout(&self) -> Duration;
}

pub struct State {
    database: DbConn,
    request_timeout: Duration,
}

impl State {
    pub async fn new(config: &Config) -> anyhow::Result<Arc<Self>> {
        let database = Self::connect_database(config).await?;
        Ok(Self::with_database(database, config.request_timeout))
    }

    pub fn with_database(database: DbConn, request_timeout: Duration) -> Arc<Self> {
        Arc::new(Self {
            database,
            request_timeout,
        })
    }

    async fn connect_database(config: &Config) -> anyhow::Result<DbConn> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(config.database.url.clone());
        opts.max_connections(config.database.max_connections)
            .sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts).await?;

        info!("Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
