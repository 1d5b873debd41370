//! # onboard-gateway
//!
//! HTTP API over the onboarding roster and the prediction engine.
//! Routes mirror the JSON contract existing clients depend on:
//! `/api/employees`, `/api/tasks`, `/api/predict`, `/api/auth`.

pub mod error;
pub mod gateway;
pub mod routes;

pub use error::{GatewayError, Result};
pub use gateway::{AppState, Gateway};
