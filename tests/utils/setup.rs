use super::request::RequestBuilder;
use http::StatusCode;
use migration::MigratorTrait;
use reqwest::Client;
use reviewer_assigner::State;
use sea_orm::{ConnectOptions, Database, DbConn};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::net::TcpListener;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

async fn setup_database() -> (ContainerAsync<Postgres>, DbConn) {
    let container = Postgres::default().with_tag("16").start().await.unwrap();

    let connection_string = format!(
        "postgres://postgres:postgres@{}:{}/postgres",
        container.get_host().await.unwrap(),
        container.get_host_port_ipv4(5432).await.unwrap(),
    );

    let opts = ConnectOptions::new(connection_string);
    let db = Database::connect(opts).await.unwrap();

    migration::Migrator::fresh(&db)
        .await
        .expect("failed to apply migrations");

    (container, db)
}

async fn setup_backend(db: DbConn) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let state = State::with_database(db, REQUEST_TIMEOUT);

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        reviewer_assigner::run(listener, state).await.unwrap();
    });

    addr
}

/// Starts a fresh Postgres container and a backend serving on top of it.
#[allow(unused)]
pub async fn setup() -> Env {
    dotenvy::dotenv().ok();

    let (container, db) = setup_database().await;

    let addr = setup_backend(db.clone()).await;

    Env {
        addr,
        client: Client::new(),
        db,
        _container: Arc::new(container),
    }
}

#[derive(Clone)]
pub struct Env {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DbConn,
    pub _container: Arc<ContainerAsync<Postgres>>,
}

#[allow(unused)]
impl Env {
    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    /// Adds a team through the API. Members are `(user_id, is_active)` pairs,
    /// each user is named `User <user_id>`.
    pub async fn add_team(&self, team_name: &str, members: &[(&str, bool)]) {
        let members = members
            .iter()
            .map(|(id, is_active)| {
                json!({
                    "user_id": id,
                    "username": format!("User {id}"),
                    "is_active": is_active,
                })
            })
            .collect::<Vec<_>>();

        let res = self
            .post("/team/add")
            .json(&json!({
                "team_name": team_name,
                "members": members,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);
    }

    /// Creates a pull request through the API and returns its JSON.
    pub async fn create_pr(&self, id: &str, author_id: &str) -> Value {
        let res = self
            .post("/pullRequest/create")
            .json(&json!({
                "pull_request_id": id,
                "pull_request_name": format!("Change {id}"),
                "author_id": author_id,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let mut body = res.json::<Value>().await;
        body["pr"].take()
    }

    pub async fn set_active(&self, user_id: &str, is_active: bool) {
        let res = self
            .post("/users/setIsActive")
            .json(&json!({
                "user_id": user_id,
                "is_active": is_active,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
