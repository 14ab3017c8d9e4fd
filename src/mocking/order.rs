//! Order Service
//!
//! TigerStyle: Storage is a trait; the service only sequences calls.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::dst::{FaultInjector, FaultType};

// =============================================================================
// Types
// =============================================================================

/// Order identifier assigned by storage
pub type OrderId = u64;

/// An order to be placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Customer placing the order
    pub customer: String,
    /// Total in cents
    pub total_cents: u64,
}

impl Order {
    /// Create an order.
    #[must_use]
    pub fn new(customer: impl Into<String>, total_cents: u64) -> Self {
        Self {
            customer: customer.into(),
            total_cents,
        }
    }
}

// =============================================================================
// Storage
// =============================================================================

/// Where orders end up.
#[async_trait]
pub trait OrderStorage: Send + Sync {
    /// Persist an order and return its id.
    async fn store(&self, order: &Order) -> Result<OrderId, OrderError>;
}

// =============================================================================
// Service
// =============================================================================

/// Places orders through an injected storage.
pub struct OrderService {
    storage: Arc<dyn OrderStorage>,
}

impl OrderService {
    /// Create a service over `storage`.
    pub fn new(storage: Arc<dyn OrderStorage>) -> Self {
        Self { storage }
    }

    /// Store the order and return the id storage assigned.
    ///
    /// # Errors
    /// Propagates storage failures.
    pub async fn place_order(&self, order: &Order) -> Result<OrderId, OrderError> {
        let order_id = self.storage.store(order).await?;

        tracing::info!(
            order_id = order_id,
            customer = %order.customer,
            total_cents = order.total_cents,
            "Placed order"
        );

        Ok(order_id)
    }
}

// =============================================================================
// Simulated Storage
// =============================================================================

#[derive(Debug)]
struct SimOrderState {
    stored: Vec<Order>,
    next_id: OrderId,
    faults: FaultInjector,
}

/// Order storage that records what it was given.
///
/// Ids are assigned sequentially from 1. `StorageWriteFail` faults make
/// `store` fail without recording.
#[derive(Debug)]
pub struct SimOrderStorage {
    state: Mutex<SimOrderState>,
}

impl SimOrderStorage {
    /// Storage with no faults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_faults(FaultInjector::disabled())
    }

    /// Storage driven by a fault injector.
    #[must_use]
    pub fn with_faults(faults: FaultInjector) -> Self {
        Self {
            state: Mutex::new(SimOrderState {
                stored: Vec::new(),
                next_id: 1,
                faults,
            }),
        }
    }

    /// Orders stored so far, oldest first.
    pub async fn stored(&self) -> Vec<Order> {
        self.state.lock().await.stored.clone()
    }
}

impl Default for SimOrderStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStorage for SimOrderStorage {
    async fn store(&self, order: &Order) -> Result<OrderId, OrderError> {
        let mut state = self.state.lock().await;

        if state.faults.should_inject(FaultType::StorageWriteFail) {
            return Err(OrderError::Storage("simulated write failure".to_string()));
        }

        let order_id = state.next_id;
        state.next_id += 1;
        state.stored.push(order.clone());
        Ok(order_id)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Order-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("order storage failed: {0}")]
    Storage(String),
}

// =============================================================================
// Tests
// =============================================================================
