use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::sync::mpsc;
use tower::ServiceExt;
use uuid::Uuid;
use warehouse_api::{
    cache::InMemoryCache,
    config::AppConfig,
    db::{self, DbConfig},
    events::{self, EventSender},
    handlers::AppServices,
    AppState,
};

/// Test harness backed by an in-memory SQLite database. Each instance gets a
/// fresh schema; the single-connection pool keeps the in-memory database
/// alive and shared for the lifetime of the harness.
pub struct TestApp {
    router: Router,
    #[allow(dead_code)]
    pub state: AppState,
    _event_task: tokio::task::JoinHandle<()>,
}

fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".into(),
        host: "127.0.0.1".into(),
        port: 18080,
        environment: "test".into(),
        log_level: "warn".into(),
        log_json: false,
        auto_migrate: true,
        cors_allowed_origins: None,
        cors_allow_any_origin: false,
        db_max_connections: 1,
        db_min_connections: 1,
        db_connect_timeout_secs: 5,
        db_acquire_timeout_secs: 5,
        db_idle_timeout_secs: 300,
        cache_ttl_secs: 60,
        request_timeout_secs: 10,
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let cfg = test_config();

        let db_config = DbConfig::from_app_config(&cfg);
        let pool = db::establish_connection_with_config(&db_config)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let db_arc = Arc::new(pool);
        let (event_tx, event_rx) = mpsc::channel(256);
        let event_sender = EventSender::new(event_tx);
        let event_task = tokio::spawn(events::process_events(event_rx));

        let cache = Arc::new(InMemoryCache::new());
        let services = AppServices::new(
            db_arc.clone(),
            Arc::new(event_sender.clone()),
            cache.clone(),
            Duration::from_secs(cfg.cache_ttl_secs),
        );

        let state = AppState {
            db: db_arc,
            config: cfg,
            event_sender,
            services,
            cache,
        };

        let router = warehouse_api::app_router().with_state(state.clone());

        Self {
            router,
            state,
            _event_task: event_task,
        }
    }

    /// Send a JSON request against the router.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Send a request and deserialize the JSON response body.
    pub async fn request_json(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let response = self.request(method, uri, body).await;
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not valid json")
        };
        (status, json)
    }

    /// Create a blueprint and return its id.
    #[allow(dead_code)]
    pub async fn create_blueprint(&self, name: &str, width: &str, height: &str, grid_size: i32) -> Uuid {
        let (status, body) = self
            .request_json(
                Method::POST,
                "/api/v1/blueprints",
                Some(serde_json::json!({
                    "name": name,
                    "width": width,
                    "height": height,
                    "grid_size": grid_size,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "blueprint create failed: {body}");
        body["id"]
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("blueprint id in response")
    }
}
