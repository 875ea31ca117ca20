//! Types for the order orchestrator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backup::BackupError;
use crate::order::OrderStoreError;

/// Errors that can occur while executing an engine command.
///
/// These never escape the public command methods; the orchestrator logs
/// them at its own boundary instead of propagating them to the caller.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Order store error.
    #[error("order store error: {0}")]
    Store(#[from] OrderStoreError),

    /// Backup facility error.
    #[error("backup error: {0}")]
    Backup(#[from] BackupError),

    /// An order in the wrong state was handed to a command.
    #[error("order #{id} is {status}, expected pending")]
    NotPending { id: u64, status: &'static str },
}

/// Aggregate view of the engine's orders and kitchen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineStatus {
    /// Orders currently in the store.
    pub total: usize,
    /// Orders waiting for a station.
    pub pending: usize,
    /// Orders currently cooking.
    pub cooking: usize,
    /// Orders cooked to completion.
    pub ready: usize,
    /// Orders handed to the customer (unused by the engine itself).
    pub delivered: usize,
    /// Stations not currently cooking.
    pub available_stations: usize,
}
