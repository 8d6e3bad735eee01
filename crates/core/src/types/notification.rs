//! Notification job payloads for the asynchronous dispatch queue.

use serde::{Deserialize, Serialize};

use crate::types::id::{OrderId, StoreId};
use crate::types::token::ConfirmationToken;

/// A notification job handed to the external dispatcher.
///
/// Jobs are enqueued fire-and-forget after the mutation that triggers them
/// has been committed; the queue consumer (an external worker) renders and
/// sends the corresponding email. No retry or ordering guarantee beyond
/// enqueue order is promised here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "job", rename_all = "snake_case")]
pub enum NotificationJob {
    /// A shopper completed checkout.
    OrderPlaced {
        /// Purchaser email (account email or guest-submitted).
        email: String,
        /// Guest-accessible lookup key for the order.
        confirmation_token: ConfirmationToken,
        /// The order that was placed.
        order_id: OrderId,
    },
    /// A platform administrator took a store live.
    StoreLive {
        /// Store display name.
        store_name: String,
        /// The store that went live.
        store_id: StoreId,
    },
    /// A platform administrator declined a store.
    StoreDeclined {
        /// Store display name.
        store_name: String,
        /// The store that was declined.
        store_id: StoreId,
    },
}

impl NotificationJob {
    /// Stable job-type key, used as the queue's dispatch discriminator.
    #[must_use]
    pub const fn job_type(&self) -> &'static str {
        match self {
            Self::OrderPlaced { .. } => "order_placed",
            Self::StoreLive { .. } => "store_live",
            Self::StoreDeclined { .. } => "store_declined",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_keys() {
        let placed = NotificationJob::OrderPlaced {
            email: "a@b.com".to_owned(),
            confirmation_token: ConfirmationToken::new_unchecked("ab".repeat(32)),
            order_id: OrderId::new(1),
        };
        assert_eq!(placed.job_type(), "order_placed");

        let live = NotificationJob::StoreLive {
            store_name: "Mallory's".to_owned(),
            store_id: StoreId::new(4),
        };
        assert_eq!(live.job_type(), "store_live");
    }

    #[test]
    fn test_payload_serialization_is_tagged() {
        let job = NotificationJob::StoreDeclined {
            store_name: "Mallory's".to_owned(),
            store_id: StoreId::new(4),
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["job"], "store_declined");
        assert_eq!(value["store_id"], 4);

        let back: NotificationJob = serde_json::from_value(value).unwrap();
        assert_eq!(back, job);
    }
}
