//! Gateway — router assembly and server startup.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use onboard_core::config::OnboardConfig;
use onboard_core::constants::VERSION;
use onboard_prediction::{ModelBackedClassifier, PredictionEngine};
use onboard_storage::StorageEngine;

use crate::routes::{auth, employees, predictions, tasks};
use crate::{GatewayError, Result};

/// Storage handle shared between the routes and the prediction engine.
pub type SharedStorage = Arc<StorageEngine>;

/// State shared across handlers. Everything here is read-only after
/// startup; the model pair is loaded exactly once in [`Gateway::new`].
#[derive(Clone)]
pub struct AppState {
    pub storage: SharedStorage,
    pub engine: Arc<PredictionEngine<SharedStorage>>,
}

/// Main gateway.
pub struct Gateway {
    state: AppState,
    addr: String,
}

impl Gateway {
    /// Wire storage and the prediction engine together. Model artifacts
    /// are attempted here and never again for the process lifetime.
    pub fn new(config: &OnboardConfig, storage: SharedStorage) -> Self {
        let classifier = ModelBackedClassifier::try_load(&config.model);
        let engine = Arc::new(PredictionEngine::new(storage.clone(), classifier));
        Self {
            state: AppState { storage, engine },
            addr: config.server.socket_addr(),
        }
    }

    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Build the axum router.
    pub fn build_router(&self) -> Router {
        Router::new()
            .route(
                "/api/employees",
                get(employees::list).post(employees::create),
            )
            .route("/api/employees/:id", get(employees::get_one))
            .route("/api/tasks", post(tasks::create))
            .route(
                "/api/tasks/:id",
                put(tasks::update).delete(tasks::remove),
            )
            .route(
                "/api/tasks/employee/:employee_id",
                get(tasks::for_employee),
            )
            .route(
                "/api/predict/employee/:employee_id",
                get(predictions::predict),
            )
            .route("/api/auth/login", post(auth::login))
            .route("/api/auth/verify", post(auth::verify))
            .route("/api/auth/logout", post(auth::logout))
            .route("/health", get(handle_health))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Bind and serve until the process exits.
    pub async fn start(&self) -> Result<()> {
        let router = self.build_router();

        tracing::info!(addr = %self.addr, "onboard gateway starting");

        let listener = tokio::net::TcpListener::bind(&self.addr)
            .await
            .map_err(GatewayError::Io)?;

        axum::serve(listener, router)
            .await
            .map_err(|e| GatewayError::Internal(e.to_string()))
    }
}

async fn handle_health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": VERSION,
        "model_loaded": state.engine.model_available(),
    }))
}
