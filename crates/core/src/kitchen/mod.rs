//! The kitchen: station-limited cooking tasks.
//!
//! A fixed number of stations bounds how many orders cook at the same time;
//! further cook requests suspend on the station semaphore until a slot
//! frees. Each cooking task runs on the background worker pool and streams
//! progress snapshots through a bounded channel.

mod config;

pub use config::KitchenConfig;

use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tracing::debug;

use crate::order::{Order, OrderStatus};

/// Runs cooking simulations under the station limit.
///
/// Cheaply cloneable; clones share the same stations.
#[derive(Clone)]
pub struct Kitchen {
    stations: Arc<Semaphore>,
    config: KitchenConfig,
}

impl Kitchen {
    /// Creates a kitchen with `config.stations` stations.
    pub fn new(config: KitchenConfig) -> Self {
        Self {
            stations: Arc::new(Semaphore::new(config.stations)),
            config,
        }
    }

    /// Number of stations not currently cooking.
    pub fn available_stations(&self) -> usize {
        self.stations.available_permits()
    }

    /// Starts cooking `order`, returning its stream of progress snapshots.
    ///
    /// The caller is expected to hand in a `Pending` snapshot; the task does
    /// not check. Once a station is acquired the sequence is finite and
    /// non-restartable: a `Cooking` snapshot at progress 0, one snapshot per
    /// completed step, and a final `Ready` snapshot at progress 1.0 in place
    /// of the last step's `Cooking` emission. The channel is bounded at 1,
    /// so the task advances only as fast as the consumer pulls.
    ///
    /// The station is returned whenever the task ends: normal completion,
    /// the receiver being dropped mid-run, or the task being aborted while
    /// waiting on a step.
    pub fn cook(&self, order: Order) -> mpsc::Receiver<Order> {
        let (tx, rx) = mpsc::channel(1);
        let stations = Arc::clone(&self.stations);
        let steps = self.config.steps.max(1);

        tokio::spawn(async move {
            // The permit is held for the task's whole lifetime; dropping it
            // on any exit path returns the station.
            let _station = match stations.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return,
            };

            debug!(order_id = order.id, "station acquired, cooking started");

            if tx
                .send(order.with_state(OrderStatus::Cooking, 0.0))
                .await
                .is_err()
            {
                return;
            }

            let step_time = order.cooking_time / steps;
            for i in 1..=steps {
                tokio::time::sleep(step_time).await;
                let snapshot = if i == steps {
                    order.with_state(OrderStatus::Ready, 1.0)
                } else {
                    order.with_state(OrderStatus::Cooking, i as f32 / steps as f32)
                };
                if tx.send(snapshot).await.is_err() {
                    debug!(order_id = order.id, "consumer gone, cooking abandoned");
                    return;
                }
            }

            debug!(order_id = order.id, "order ready");
        });

        rx
    }
}
