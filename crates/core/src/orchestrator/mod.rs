//! The order orchestrator.
//!
//! Exposes the engine's public operations: create an order, cook one order,
//! cook everything pending, clear the store, and hand a backup job to the
//! external facility. Every command catches its own failures and logs them;
//! nothing propagates to the caller.

mod config;
mod types;

pub use config::OrchestratorConfig;
pub use types::{EngineStatus, OrchestratorError};

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

use crate::backup::{BackupConfig, BackupScheduler, SpawnBackupScheduler};
use crate::kitchen::{Kitchen, KitchenConfig};
use crate::metrics;
use crate::notify::Notifier;
use crate::order::{Order, OrderStatus, OrderStore};

/// Coordinates the order store, the kitchen, notifications, and the backup
/// boundary.
///
/// The orchestrator itself is stateless control logic; all state lives in
/// the [`OrderStore`] it owns.
pub struct Orchestrator {
    store: Arc<OrderStore>,
    kitchen: Kitchen,
    notifier: Notifier,
    backup: Arc<dyn BackupScheduler>,
    config: OrchestratorConfig,
    backup_config: BackupConfig,
}

impl Orchestrator {
    /// Builds an orchestrator with the spawn-based backup facility.
    ///
    /// Returns the orchestrator together with its notification stream; the
    /// caller is the single expected subscriber.
    pub fn new(
        config: OrchestratorConfig,
        kitchen_config: KitchenConfig,
        backup_config: BackupConfig,
    ) -> (Self, mpsc::Receiver<String>) {
        Self::with_backup(
            config,
            kitchen_config,
            backup_config,
            Arc::new(SpawnBackupScheduler::new()),
        )
    }

    /// Builds an orchestrator with a caller-provided backup facility.
    pub fn with_backup(
        config: OrchestratorConfig,
        kitchen_config: KitchenConfig,
        backup_config: BackupConfig,
        backup: Arc<dyn BackupScheduler>,
    ) -> (Self, mpsc::Receiver<String>) {
        let (notifier, events) = Notifier::channel();
        let orchestrator = Self {
            store: Arc::new(OrderStore::new()),
            kitchen: Kitchen::new(kitchen_config),
            notifier,
            backup,
            config,
            backup_config,
        };
        (orchestrator, events)
    }

    /// Creates one new `Pending` order with a random dish and cooking time,
    /// then publishes a creation notification.
    pub async fn create_order(&self) {
        if let Err(e) = self.try_create_order().await {
            error!("create order failed: {}", e);
        }
    }

    async fn try_create_order(&self) -> Result<(), OrchestratorError> {
        let id = self.store.allocate_id();
        let order = Order::new(id, self.random_dish(), self.random_cooking_time());
        info!(order_id = id, name = %order.name, "order created");

        self.store.append(order).await?;
        metrics::ORDERS_CREATED.inc();
        self.notifier.publish(format!("Order #{} added", id)).await;
        Ok(())
    }

    /// Cooks a single order to completion, applying every progress snapshot
    /// to the store.
    ///
    /// Rejects orders that are not `Pending`. The same id may still be
    /// processed twice concurrently if the caller asks for it with two
    /// `Pending` snapshots; the engine does not guard that race and the
    /// store simply keeps whichever snapshot lands last.
    pub async fn process_order(&self, order: Order) {
        if let Err(e) = self.try_process_order(order).await {
            error!("process order failed: {}", e);
        }
    }

    async fn try_process_order(&self, order: Order) -> Result<(), OrchestratorError> {
        if order.status != OrderStatus::Pending {
            return Err(OrchestratorError::NotPending {
                id: order.id,
                status: order.status.as_str(),
            });
        }

        let id = order.id;
        info!(order_id = id, "processing order");
        Self::drive_order(Arc::clone(&self.store), self.kitchen.clone(), order).await;
        info!(order_id = id, "order processed");
        Ok(())
    }

    /// Cooks every pending order concurrently, waits for all of them, then
    /// publishes a single batch-complete notification.
    ///
    /// One order's failure does not cancel its siblings; a task that does
    /// not finish cleanly is logged and the batch carries on.
    pub async fn process_all_pending(&self) {
        let pending: Vec<Order> = self
            .store
            .snapshot()
            .await
            .into_iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .collect();

        info!(count = pending.len(), "processing all pending orders");

        let mut handles = Vec::with_capacity(pending.len());
        for order in pending {
            let store = Arc::clone(&self.store);
            let kitchen = self.kitchen.clone();
            handles.push(tokio::spawn(async move {
                Self::drive_order(store, kitchen, order).await;
            }));
        }

        for handle in handles {
            if let Err(e) = handle.await {
                warn!("order task did not finish cleanly: {}", e);
            }
        }

        metrics::BATCHES_PROCESSED.inc();
        self.notifier.publish("All orders processed").await;
        info!("all pending orders processed");
    }

    /// Discards every order and resets the id sequence.
    pub async fn clear_orders(&self) {
        self.store.clear().await;
        info!("orders cleared");
    }

    /// Hands a backup job to the external facility and confirms the
    /// submission.
    pub async fn schedule_backup(&self) {
        if let Err(e) = self.try_schedule_backup().await {
            error!("schedule backup failed: {}", e);
        }
    }

    async fn try_schedule_backup(&self) -> Result<(), OrchestratorError> {
        self.backup.schedule(self.backup_config.job()).await?;
        metrics::BACKUPS_SCHEDULED.inc();
        self.notifier.publish("Backup scheduled").await;
        info!("backup job submitted");
        Ok(())
    }

    /// Returns a consistent copy of all orders.
    pub async fn snapshot(&self) -> Vec<Order> {
        self.store.snapshot().await
    }

    /// Subscribes to the push-updated view of all orders.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Order>> {
        self.store.subscribe()
    }

    /// Current per-state order counts and station availability.
    pub async fn status(&self) -> EngineStatus {
        let orders = self.store.snapshot().await;
        let mut status = EngineStatus {
            total: orders.len(),
            available_stations: self.kitchen.available_stations(),
            ..Default::default()
        };
        for order in &orders {
            match order.status {
                OrderStatus::Pending => status.pending += 1,
                OrderStatus::Cooking => status.cooking += 1,
                OrderStatus::Ready => status.ready += 1,
                OrderStatus::Delivered => status.delivered += 1,
            }
        }
        status
    }

    /// Drains one cooking stream into the store.
    ///
    /// A snapshot for an id no longer present (a clear won the race) is
    /// dropped; the stream is still consumed to its end so the station
    /// frees up through the normal path.
    async fn drive_order(store: Arc<OrderStore>, kitchen: Kitchen, order: Order) {
        let id = order.id;
        let started = Instant::now();
        let mut snapshots = kitchen.cook(order);

        while let Some(snapshot) = snapshots.recv().await {
            let ready = snapshot.status == OrderStatus::Ready;
            if !store.replace(snapshot).await {
                debug!(order_id = id, "order no longer in store, dropping snapshot");
            }
            if ready {
                metrics::ORDERS_COMPLETED.inc();
                metrics::COOK_DURATION.observe(started.elapsed().as_secs_f64());
            }
        }
    }

    fn random_dish(&self) -> String {
        let mut rng = rand::thread_rng();
        self.config
            .menu
            .choose(&mut rng)
            .cloned()
            .unwrap_or_else(|| "House Special".to_string())
    }

    fn random_cooking_time(&self) -> Duration {
        let lo = self.config.min_cooking_ms.min(self.config.max_cooking_ms);
        let hi = self.config.min_cooking_ms.max(self.config.max_cooking_ms);
        Duration::from_millis(rand::thread_rng().gen_range(lo..=hi))
    }
}
