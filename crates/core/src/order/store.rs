//! The shared order store.
//!
//! Holds the canonical list of all known orders behind a single exclusive
//! lock. Every mutation publishes the full list through a watch channel so
//! read-only observers always see a consistent snapshot.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tokio::sync::{watch, Mutex};

use super::Order;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum OrderStoreError {
    /// An order with this id is already present.
    #[error("order #{0} already exists")]
    DuplicateId(u64),
}

/// The canonical, lock-protected collection of all orders.
///
/// The id counter is reset together with the list by [`clear`](Self::clear),
/// inside the same critical section; increments themselves are plain atomic
/// operations and never take the list lock.
pub struct OrderStore {
    orders: Mutex<Vec<Order>>,
    next_id: AtomicU64,
    watch_tx: watch::Sender<Vec<Order>>,
}

impl OrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        let (watch_tx, _) = watch::channel(Vec::new());
        Self {
            orders: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
            watch_tx,
        }
    }

    /// Returns the next unique order id.
    ///
    /// Monotonically increasing until [`clear`](Self::clear) resets the
    /// sequence. The first id handed out is 1.
    pub fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Appends a new order; insertion order reflects creation order.
    ///
    /// Rejects a duplicate id rather than corrupting the one-record-per-id
    /// invariant (an id allocation can race a concurrent clear).
    pub async fn append(&self, order: Order) -> Result<(), OrderStoreError> {
        let mut orders = self.orders.lock().await;
        if orders.iter().any(|o| o.id == order.id) {
            return Err(OrderStoreError::DuplicateId(order.id));
        }
        orders.push(order);
        self.publish(&orders);
        Ok(())
    }

    /// Replaces the record whose id matches `order.id`.
    ///
    /// Returns `false` without touching the store when no such id exists:
    /// a cooking task may deliver a snapshot after a concurrent clear, and
    /// that snapshot must not resurrect the order.
    pub async fn replace(&self, order: Order) -> bool {
        let mut orders = self.orders.lock().await;
        let Some(slot) = orders.iter_mut().find(|o| o.id == order.id) else {
            return false;
        };
        *slot = order;
        self.publish(&orders);
        true
    }

    /// Empties the store and resets the id sequence in one critical section.
    pub async fn clear(&self) {
        let mut orders = self.orders.lock().await;
        orders.clear();
        self.next_id.store(0, Ordering::SeqCst);
        self.publish(&orders);
    }

    /// Returns a consistent copy of the current collection.
    pub async fn snapshot(&self) -> Vec<Order> {
        self.orders.lock().await.clone()
    }

    /// Subscribes to the push-updated view of the collection.
    ///
    /// The watch value is replaced after every successful mutation, while
    /// the list lock is still held, so observers never see an interleaved
    /// state.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Order>> {
        self.watch_tx.subscribe()
    }

    /// Number of orders currently held.
    pub async fn len(&self) -> usize {
        self.orders.lock().await.len()
    }

    /// Whether the store holds no orders.
    pub async fn is_empty(&self) -> bool {
        self.orders.lock().await.is_empty()
    }

    fn publish(&self, orders: &[Order]) {
        self.watch_tx.send_replace(orders.to_vec());
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
