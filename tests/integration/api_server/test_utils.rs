//! Test utilities for API server integration tests

use axum_test::TestServer;
use junkfilter::config::Config;
use junkfilter::core::http::{create_router, AppState};
use junkfilter::metrics::Metrics;
use std::path::PathBuf;
use std::sync::Arc;

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
}

impl TestApiServer {
    /// Server reading the sample files shipped under `data/`.
    pub async fn new() -> Self {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        Self::with_config(Config {
            rule_set_path: root.join("data/RuleSet.json"),
            signals_path: root.join("data/raw_data.json"),
            ..Config::default()
        })
        .await
    }

    pub async fn with_config(config: Config) -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let state = AppState::new(config, metrics.clone());

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self { server, metrics }
    }
}
