//! Mock booking store.

use crate::booking::{Booking, BookingStatus};
use crate::error::{BookingError, Result};
use crate::providers::BookingStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory booking store.
///
/// Records are kept in insertion order; listings iterate in reverse so
/// newest-first matches the persistent implementation.
#[derive(Debug, Clone)]
pub struct MockBookingStore {
    bookings: Arc<Mutex<Vec<Booking>>>,
}

impl MockBookingStore {
    /// Create an empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for MockBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingStore for MockBookingStore {
    async fn insert(&self, booking: &Booking) -> Result<()> {
        self.bookings
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?
            .push(booking.clone());
        Ok(())
    }

    async fn get(&self, booking_id: Uuid) -> Result<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?
            .iter()
            .find(|b| b.id == booking_id)
            .cloned())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>> {
        Ok(self
            .bookings
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?
            .iter()
            .rev()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Booking>> {
        Ok(self
            .bookings
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?
            .iter()
            .rev()
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Booking>> {
        let mut bookings = self
            .bookings
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?;
        Ok(bookings.iter_mut().find(|b| b.id == booking_id).map(|b| {
            b.status = status;
            b.updated_at = updated_at;
            b.clone()
        }))
    }
}
