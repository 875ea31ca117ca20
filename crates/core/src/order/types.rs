//! Core order data types.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle states of an order.
///
/// The engine drives `Pending -> Cooking -> Ready`. `Delivered` is reserved
/// for a future deliver command and is never produced by the engine itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Created, waiting for a cooking station.
    Pending,
    /// Currently on a station; `progress` tracks completion.
    Cooking,
    /// Cooked to completion.
    Ready,
    /// Handed to the customer. No engine operation produces this state.
    Delivered,
}

impl OrderStatus {
    /// Returns the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Cooking => "cooking",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
        }
    }
}

/// A single kitchen order.
///
/// Orders are immutable values; an update is a whole-record replacement by
/// id in the [`OrderStore`](super::OrderStore). Cooking tasks only ever hold
/// transient copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique positive id, assigned once at creation.
    pub id: u64,
    /// Display name, informational only.
    pub name: String,
    /// Total simulated cooking time, fixed at creation.
    pub cooking_time: Duration,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// Completion fraction in `[0.0, 1.0]`.
    pub progress: f32,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new `Pending` order at progress 0.
    pub fn new(id: u64, name: impl Into<String>, cooking_time: Duration) -> Self {
        Self {
            id,
            name: name.into(),
            cooking_time,
            status: OrderStatus::Pending,
            progress: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Returns a copy of this order with a new status and progress.
    pub fn with_state(&self, status: OrderStatus, progress: f32) -> Self {
        Self {
            status,
            progress,
            ..self.clone()
        }
    }
}
