//! Notification enqueue boundary.
//!
//! Same queue table the storefront writes to; the external worker does not
//! care which surface enqueued a job. Enqueue failures are logged by the
//! caller and never fail the request.

use sqlx::PgPool;

use plaza_core::{NotificationJob, NotificationJobId};

use crate::db::RepositoryError;

/// Writes notification jobs to the queue table.
#[derive(Clone)]
pub struct NotificationQueue {
    pool: PgPool,
}

impl NotificationQueue {
    /// Create a queue backed by the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Enqueue a job for the external worker.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert or payload
    /// serialisation fails.
    pub async fn enqueue(&self, job: &NotificationJob) -> Result<NotificationJobId, RepositoryError> {
        let payload = serde_json::to_value(job)
            .map_err(|e| RepositoryError::DataCorruption(format!("job payload: {e}")))?;

        let (id,): (i32,) = sqlx::query_as(
            r"
            INSERT INTO storefront.notification_job (job_type, payload)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(job.job_type())
        .bind(payload)
        .fetch_one(&self.pool)
        .await?;

        Ok(NotificationJobId::new(id))
    }
}
