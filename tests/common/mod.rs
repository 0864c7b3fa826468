use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use migrations::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use orderdesk_api::{config::AppConfig, db, handlers::AppServices, AppState};

/// Helper harness for spinning up an application router backed by a
/// file-based SQLite database.
pub struct TestApp {
    router: Router,
    pub db: Arc<DatabaseConnection>,
    _tmp: tempfile::TempDir,
}

impl TestApp {
    /// Construct a test application with every migration applied
    /// (55 seeded orders).
    #[allow(dead_code)]
    pub async fn new() -> Self {
        Self::with_migrations(None).await
    }

    /// Construct a test application with only the first migration applied
    /// (the 5-row base seed).
    #[allow(dead_code)]
    pub async fn with_base_seed() -> Self {
        Self::with_migrations(Some(1)).await
    }

    async fn with_migrations(steps: Option<u32>) -> Self {
        let tmp = tempfile::TempDir::new().expect("create temp dir");
        let db_path = tmp.path().join("orderdesk_test.db");

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let db = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("connect to test database");
        Migrator::up(&db, steps).await.expect("run migrations");

        let db = Arc::new(db);
        let services = AppServices::new(db.clone());
        let state = AppState {
            db: db.clone(),
            config: cfg,
            services,
        };

        let router = Router::new()
            .nest("/api/v1", orderdesk_api::api_v1_routes())
            .with_state(state);

        Self {
            router,
            db,
            _tmp: tmp,
        }
    }

    /// Send a request and return the raw response.
    pub async fn request(&self, method: Method, uri: &str, json: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let request_body = match json {
            Some(payload) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(payload.to_string())
            }
            None => Body::empty(),
        };

        let request = builder.body(request_body).expect("build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("route request")
    }

    /// Send a request and parse the response body as JSON.
    pub async fn request_json(
        &self,
        method: Method,
        uri: &str,
        json: Option<Value>,
    ) -> (StatusCode, Value) {
        let response = self.request(method, uri, json).await;
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read response body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("parse response body")
        };
        (status, value)
    }

    #[allow(dead_code)]
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request_json(Method::GET, uri, None).await
    }
}
