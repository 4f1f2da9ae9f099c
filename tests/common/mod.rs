//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an in-memory DB and a full
//! [`AppContext`]. The [`TestHarness::with_server`] constructor
//! starts Axum on a random port for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;

use heroes_db::pool::{init_memory_pool, DbPool};
use heroes_server::context::AppContext;
use heroes_server::router::build_router;
use serde_json::{json, Value};

/// Test harness wrapping a fully-constructed [`AppContext`] backed by an
/// in-memory database.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
    pub addr: SocketAddr,
    pub client: reqwest::Client,
}

impl TestHarness {
    /// Start an Axum server on a random port backed by a fresh in-memory DB.
    pub async fn with_server() -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        let ctx = AppContext::new(db.clone());
        let app = build_router(ctx.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            ctx,
            db,
            addr,
            client: reqwest::Client::new(),
        }
    }

    /// Absolute URL for a path on the test server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a database connection from the pool.
    pub fn conn(&self) -> heroes_db::pool::PooledConnection {
        heroes_db::pool::get_conn(&self.db).expect("failed to get db connection")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn post(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn patch(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .patch(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client.delete(self.url(path)).send().await.unwrap()
    }

    /// Create a team over HTTP and return its JSON body.
    pub async fn create_team(&self, name: &str, headquarters: &str) -> Value {
        let resp = self
            .post("/teams/", json!({ "name": name, "headquarters": headquarters }))
            .await;
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }

    /// Create a hero over HTTP and return its JSON body.
    pub async fn create_hero(&self, body: Value) -> Value {
        let resp = self.post("/heroes/", body).await;
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }
}
