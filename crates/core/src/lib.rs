//! Kitchen order-processing engine.
//!
//! Simulates a kitchen cooking orders under a limited number of stations.
//! Each cooking run streams progress snapshots back into a lock-protected
//! order store; a bounded notification channel keeps the single subscriber
//! informed about lifecycle events. Everything is in-memory and
//! single-process: there is no persistence, no network surface, and no UI
//! here, only the engine those shells observe.

pub mod backup;
pub mod config;
pub mod kitchen;
pub mod metrics;
pub mod notify;
pub mod order;
pub mod orchestrator;
pub mod testing;

pub use backup::{BackupConfig, BackupError, BackupJob, BackupScheduler, SpawnBackupScheduler};
pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use kitchen::{Kitchen, KitchenConfig};
pub use notify::Notifier;
pub use order::{Order, OrderStatus, OrderStore, OrderStoreError};
pub use orchestrator::{EngineStatus, Orchestrator, OrchestratorConfig, OrchestratorError};
