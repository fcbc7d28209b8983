//! PostgreSQL booking store.

use crate::db_err;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;
use wayfarer_core::{Booking, BookingStatus, BookingStore, Result};

const BOOKING_COLUMNS: &str = "id, user_id, package_id, status, booking_date, \
     number_of_people, duration, total_price, special_requests, created_at, updated_at";

/// Booking store backed by the `bookings` table.
#[derive(Clone)]
pub struct PostgresBookingStore {
    pool: PgPool,
}

impl PostgresBookingStore {
    /// Create a store over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &PgRow) -> Result<Booking> {
        let status: String = row.try_get("status").map_err(db_err)?;
        Ok(Booking {
            id: row.try_get("id").map_err(db_err)?,
            user_id: row.try_get("user_id").map_err(db_err)?,
            package_id: row.try_get("package_id").map_err(db_err)?,
            status: status.parse::<BookingStatus>()?,
            booking_date: row.try_get("booking_date").map_err(db_err)?,
            number_of_people: row.try_get("number_of_people").map_err(db_err)?,
            duration: row.try_get("duration").map_err(db_err)?,
            total_price: row.try_get("total_price").map_err(db_err)?,
            special_requests: row.try_get("special_requests").map_err(db_err)?,
            created_at: row.try_get("created_at").map_err(db_err)?,
            updated_at: row.try_get("updated_at").map_err(db_err)?,
        })
    }
}

#[async_trait]
impl BookingStore for PostgresBookingStore {
    async fn insert(&self, booking: &Booking) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO bookings (
                id, user_id, package_id, status, booking_date,
                number_of_people, duration, total_price, special_requests,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(booking.id)
        .bind(booking.user_id)
        .bind(booking.package_id)
        .bind(booking.status.as_str())
        .bind(booking.booking_date)
        .bind(booking.number_of_people)
        .bind(&booking.duration)
        .bind(booking.total_price)
        .bind(booking.special_requests.as_deref())
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn get(&self, booking_id: Uuid) -> Result<Option<Booking>> {
        let row = sqlx::query(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(Self::row_to_booking).transpose()
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>> {
        let rows = sqlx::query(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings \
             WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn list_all(&self) -> Result<Vec<Booking>> {
        let rows = sqlx::query(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn update_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Booking>> {
        let row = sqlx::query(&format!(
            "UPDATE bookings SET status = $1, updated_at = $2 \
             WHERE id = $3 RETURNING {BOOKING_COLUMNS}"
        ))
        .bind(status.as_str())
        .bind(updated_at)
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(Self::row_to_booking).transpose()
    }
}
