//! PostgreSQL feedback store.

use crate::db_err;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::str::FromStr;
use uuid::Uuid;
use wayfarer_core::{Feedback, FeedbackStatus, FeedbackStore, Result};

const FEEDBACK_COLUMNS: &str = "id, name, email, subject, message, status, created_at, updated_at";

/// Feedback store backed by the `feedback` table.
#[derive(Clone)]
pub struct PostgresFeedbackStore {
    pool: PgPool,
}

impl PostgresFeedbackStore {
    /// Create a store over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_feedback(row: &PgRow) -> Result<Feedback> {
        let status: String = row.try_get("status").map_err(db_err)?;
        Ok(Feedback {
            id: row.try_get("id").map_err(db_err)?,
            name: row.try_get("name").map_err(db_err)?,
            email: row.try_get("email").map_err(db_err)?,
            subject: row.try_get("subject").map_err(db_err)?,
            message: row.try_get("message").map_err(db_err)?,
            status: FeedbackStatus::from_str(&status)?,
            created_at: row.try_get("created_at").map_err(db_err)?,
            updated_at: row.try_get("updated_at").map_err(db_err)?,
        })
    }
}

#[async_trait]
impl FeedbackStore for PostgresFeedbackStore {
    async fn insert(&self, feedback: &Feedback) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO feedback (
                id, name, email, subject, message, status,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(feedback.id)
        .bind(&feedback.name)
        .bind(&feedback.email)
        .bind(&feedback.subject)
        .bind(&feedback.message)
        .bind(feedback.status.as_str())
        .bind(feedback.created_at)
        .bind(feedback.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Feedback>> {
        let rows = sqlx::query(&format!(
            "SELECT {FEEDBACK_COLUMNS} FROM feedback ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(Self::row_to_feedback).collect()
    }

    async fn update_status(
        &self,
        feedback_id: Uuid,
        status: FeedbackStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Feedback>> {
        let row = sqlx::query(&format!(
            "UPDATE feedback SET status = $2, updated_at = $3 \
             WHERE id = $1 RETURNING {FEEDBACK_COLUMNS}"
        ))
        .bind(feedback_id)
        .bind(status.as_str())
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(Self::row_to_feedback).transpose()
    }

    async fn delete(&self, feedback_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(feedback_id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected() > 0)
    }
}
