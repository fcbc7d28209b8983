//! Mock feedback store.

use crate::error::{BookingError, Result};
use crate::feedback::{Feedback, FeedbackStatus};
use crate::providers::FeedbackStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory feedback store.
///
/// Records are kept in insertion order; `list` iterates in reverse so
/// newest-first matches the persistent implementation.
#[derive(Debug, Clone)]
pub struct MockFeedbackStore {
    entries: Arc<Mutex<Vec<Feedback>>>,
}

impl MockFeedbackStore {
    /// Create an empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for MockFeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedbackStore for MockFeedbackStore {
    async fn insert(&self, feedback: &Feedback) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?
            .push(feedback.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Feedback>> {
        Ok(self
            .entries
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?
            .iter()
            .rev()
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        feedback_id: Uuid,
        status: FeedbackStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Feedback>> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?;
        Ok(entries.iter_mut().find(|f| f.id == feedback_id).map(|f| {
            f.status = status;
            f.updated_at = updated_at;
            f.clone()
        }))
    }

    async fn delete(&self, feedback_id: Uuid) -> Result<bool> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?;
        let before = entries.len();
        entries.retain(|f| f.id != feedback_id);
        Ok(entries.len() < before)
    }
}
