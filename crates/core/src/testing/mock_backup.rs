//! Mock backup scheduler for testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backup::{BackupError, BackupJob, BackupScheduler};

/// Mock implementation of the [`BackupScheduler`] trait.
///
/// Records submitted jobs for assertions and can be primed to reject the
/// next submission.
#[derive(Debug, Default)]
pub struct MockBackupScheduler {
    jobs: Arc<RwLock<Vec<BackupJob>>>,
    next_error: Arc<RwLock<Option<String>>>,
}

impl MockBackupScheduler {
    /// Create a new mock scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded job submissions.
    pub async fn scheduled_jobs(&self) -> Vec<BackupJob> {
        self.jobs.read().await.clone()
    }

    /// Get the number of jobs submitted.
    pub async fn job_count(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// Configure the next submission to fail with the given reason.
    pub async fn set_next_error(&self, reason: impl Into<String>) {
        *self.next_error.write().await = Some(reason.into());
    }
}

#[async_trait]
impl BackupScheduler for MockBackupScheduler {
    async fn schedule(&self, job: BackupJob) -> Result<(), BackupError> {
        if let Some(reason) = self.next_error.write().await.take() {
            return Err(BackupError::Rejected(reason));
        }
        self.jobs.write().await.push(job);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn job(ms: u64) -> BackupJob {
        BackupJob {
            work_duration: Duration::from_millis(ms),
        }
    }

    #[tokio::test]
    async fn test_records_submissions() {
        let scheduler = MockBackupScheduler::new();
        scheduler.schedule(job(100)).await.unwrap();
        scheduler.schedule(job(200)).await.unwrap();

        assert_eq!(scheduler.job_count().await, 2);
        let jobs = scheduler.scheduled_jobs().await;
        assert_eq!(jobs[0].work_duration, Duration::from_millis(100));
        assert_eq!(jobs[1].work_duration, Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_error_injection_is_consumed() {
        let scheduler = MockBackupScheduler::new();
        scheduler.set_next_error("facility offline").await;

        let result = scheduler.schedule(job(100)).await;
        assert!(matches!(result, Err(BackupError::Rejected(_))));
        assert_eq!(scheduler.job_count().await, 0);

        // The error is one-shot; the next submission goes through.
        scheduler.schedule(job(100)).await.unwrap();
        assert_eq!(scheduler.job_count().await, 1);
    }
}
