//! # onboard-storage
//!
//! SQLite persistence for the onboarding roster. Owns the schema migrations
//! and implements [`IRosterStorage`](onboard_core::IRosterStorage) on top of
//! a single bundled-SQLite connection.

pub mod engine;
pub mod migrations;
pub mod queries;
pub mod seed;

pub use engine::StorageEngine;

use onboard_core::errors::{OnboardError, StorageError};

/// Wrap a rusqlite failure into the workspace error type.
pub(crate) fn to_storage_err(message: impl Into<String>) -> OnboardError {
    OnboardError::Storage(StorageError::SqliteError {
        message: message.into(),
    })
}
