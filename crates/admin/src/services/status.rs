//! Store and order status management.
//!
//! Both managers share the same contract: mutate the status field, persist,
//! then conditionally enqueue notifications keyed by the new value. Store
//! approval and decline notify the store owner; order status edits never do.

use sqlx::PgPool;
use thiserror::Error;
use tracing::instrument;

use plaza_core::{NotificationJob, OrderId, OrderStatus, StoreId, StoreStatus};

use crate::db::{OrderRepository, RepositoryError, StoreRepository};
use crate::models::{Order, Store};
use crate::services::notifications::NotificationQueue;

/// Errors from status transitions.
#[derive(Debug, Error)]
pub enum StatusError {
    /// The store or order does not exist.
    #[error("not found")]
    NotFound,

    /// Underlying repository failure.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for StatusError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => Self::NotFound,
            other => Self::Repository(other),
        }
    }
}

/// Applies status transitions and their notification side effects.
#[derive(Clone)]
pub struct StatusService {
    pool: PgPool,
    queue: NotificationQueue,
}

impl StatusService {
    /// Create a status service.
    #[must_use]
    pub const fn new(pool: PgPool, queue: NotificationQueue) -> Self {
        Self { pool, queue }
    }

    /// Set an order's status.
    ///
    /// Order status labels are open-ended and administrator-set. No
    /// notification is enqueued for order edits; only store transitions
    /// notify. Setting the same status twice is a harmless no-op update.
    ///
    /// # Errors
    ///
    /// Returns `StatusError::NotFound` if the order does not exist,
    /// `StatusError::Repository` on database failure.
    #[instrument(skip(self, status), fields(status = %status))]
    pub async fn change_order_status(
        &self,
        order_id: OrderId,
        status: &OrderStatus,
    ) -> Result<Order, StatusError> {
        let orders = OrderRepository::new(&self.pool);
        let order = orders.update_status(order_id, status).await?;

        tracing::info!(order_id = %order.id, status = %order.status, "order status updated");
        Ok(order)
    }

    /// Set a store's status.
    ///
    /// Setting the current status again is a no-op: nothing is persisted
    /// and no notification is enqueued, so repeating a transition cannot
    /// double-notify the owner. Going live or being declined enqueues one
    /// job for the owner; disabling is silent.
    ///
    /// # Errors
    ///
    /// Returns `StatusError::NotFound` if the store does not exist,
    /// `StatusError::Repository` on database failure.
    #[instrument(skip(self))]
    pub async fn change_store_status(
        &self,
        store_id: StoreId,
        status: StoreStatus,
    ) -> Result<Store, StatusError> {
        let stores = StoreRepository::new(&self.pool);

        let current = stores.get(store_id).await?.ok_or(StatusError::NotFound)?;
        if current.status == status {
            return Ok(current);
        }

        let store = stores.update_status(store_id, status).await?;
        tracing::info!(store_id = %store.id, status = %store.status, "store status updated");

        if let Some(job) = store_transition_job(current.status, status, &store.name, store.id)
            && let Err(e) = self.queue.enqueue(&job).await
        {
            // The status change is already committed; the notification is
            // best-effort.
            tracing::error!(store_id = %store.id, error = %e, "failed to enqueue store notification");
        }

        Ok(store)
    }
}

/// Decide which notification, if any, a store transition produces.
///
/// Going live or being declined notifies the owner once. Re-applying the
/// current status, disabling, or moving back to pending stays silent.
fn store_transition_job(
    current: StoreStatus,
    new: StoreStatus,
    store_name: &str,
    store_id: StoreId,
) -> Option<NotificationJob> {
    if current == new {
        return None;
    }

    match new {
        StoreStatus::Live => Some(NotificationJob::StoreLive {
            store_name: store_name.to_owned(),
            store_id,
        }),
        StoreStatus::Declined => Some(NotificationJob::StoreDeclined {
            store_name: store_name.to_owned(),
            store_id,
        }),
        StoreStatus::Pending | StoreStatus::Disabled => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(current: StoreStatus, new: StoreStatus) -> Option<NotificationJob> {
        store_transition_job(current, new, "Pine & Brine", StoreId::new(7))
    }

    #[test]
    fn test_going_live_notifies_owner() {
        let job = transition(StoreStatus::Pending, StoreStatus::Live);
        assert!(matches!(
            job,
            Some(NotificationJob::StoreLive { ref store_name, store_id })
                if store_name == "Pine & Brine" && store_id == StoreId::new(7)
        ));
    }

    #[test]
    fn test_decline_notifies_owner() {
        let job = transition(StoreStatus::Pending, StoreStatus::Declined);
        assert!(matches!(
            job,
            Some(NotificationJob::StoreDeclined { ref store_name, store_id })
                if store_name == "Pine & Brine" && store_id == StoreId::new(7)
        ));
    }

    #[test]
    fn test_disable_is_silent() {
        assert!(transition(StoreStatus::Live, StoreStatus::Disabled).is_none());
    }

    #[test]
    fn test_back_to_pending_is_silent() {
        assert!(transition(StoreStatus::Declined, StoreStatus::Pending).is_none());
    }

    #[test]
    fn test_repeating_current_status_is_silent() {
        assert!(transition(StoreStatus::Live, StoreStatus::Live).is_none());
        assert!(transition(StoreStatus::Declined, StoreStatus::Declined).is_none());
    }
}
