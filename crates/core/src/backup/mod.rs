//! The background backup boundary.
//!
//! The engine only submits a unit of work; running it and signalling the
//! user belong to the hosting facility. [`SpawnBackupScheduler`] is the
//! in-process stand-in that runs jobs as detached tasks.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors from submitting a backup job.
#[derive(Debug, Error)]
pub enum BackupError {
    /// The facility refused to take the job.
    #[error("backup facility rejected the job: {0}")]
    Rejected(String),
}

/// A fire-and-forget unit of backup work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupJob {
    /// How long the simulated backup runs.
    pub work_duration: Duration,
}

/// Configuration for the backup facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Simulated backup work duration in milliseconds.
    #[serde(default = "default_work_ms")]
    pub work_ms: u64,
}

fn default_work_ms() -> u64 {
    5000
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            work_ms: default_work_ms(),
        }
    }
}

impl BackupConfig {
    /// Builds the job this configuration describes.
    pub fn job(&self) -> BackupJob {
        BackupJob {
            work_duration: Duration::from_millis(self.work_ms),
        }
    }
}

/// A facility that runs backup jobs outside the engine's state.
///
/// Submission is fire-and-forget; the engine never observes the job's
/// outcome, only whether the hand-off itself succeeded.
#[async_trait]
pub trait BackupScheduler: Send + Sync {
    /// Submits `job` to run asynchronously.
    async fn schedule(&self, job: BackupJob) -> Result<(), BackupError>;
}

/// Scheduler that runs jobs as detached tokio tasks.
///
/// The completion signal is the facility's responsibility; here a log line
/// stands in for it.
#[derive(Debug, Clone, Default)]
pub struct SpawnBackupScheduler;

impl SpawnBackupScheduler {
    /// Creates a new spawn-based scheduler.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BackupScheduler for SpawnBackupScheduler {
    async fn schedule(&self, job: BackupJob) -> Result<(), BackupError> {
        tokio::spawn(async move {
            info!("backup started");
            tokio::time::sleep(job.work_duration).await;
            info!("backup completed");
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BackupConfig::default();
        assert_eq!(config.work_ms, 5000);
        assert_eq!(config.job().work_duration, Duration::from_secs(5));
    }

    #[test]
    fn test_deserialize_full() {
        let config: BackupConfig = toml::from_str("work_ms = 250").unwrap();
        assert_eq!(config.work_ms, 250);
    }

    #[tokio::test]
    async fn test_spawn_scheduler_accepts_job() {
        let scheduler = SpawnBackupScheduler::new();
        let result = scheduler
            .schedule(BackupJob {
                work_duration: Duration::from_millis(1),
            })
            .await;
        assert!(result.is_ok());
    }
}
