//! Testing utilities and mock implementations.
//!
//! Provides a mock of the backup boundary plus order fixtures, so
//! integration tests can exercise the engine without real infrastructure.

mod mock_backup;

pub use mock_backup::MockBackupScheduler;

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::time::Duration;

    use crate::order::Order;

    /// Create a pending order with the given id and cooking time.
    pub fn pending_order(id: u64, cooking_ms: u64) -> Order {
        Order::new(
            id,
            format!("Test Dish {}", id),
            Duration::from_millis(cooking_ms),
        )
    }
}
