//! Idempotent schema bootstrap.

use crate::db_err;
use sqlx::PgPool;
use wayfarer_core::Result;

/// Create all tables and indexes if they do not exist yet.
///
/// # Errors
///
/// Returns [`wayfarer_core::BookingError::Storage`] if any DDL statement
/// fails.
pub async fn create_schema(pool: &PgPool) -> Result<()> {
    let statements = [
        r"
        CREATE TABLE IF NOT EXISTS packages (
            id UUID PRIMARY KEY,
            title TEXT NOT NULL,
            location TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL CHECK (price >= 0),
            description TEXT NOT NULL,
            image TEXT NOT NULL,
            duration TEXT NOT NULL,
            max_group_size INTEGER NOT NULL CHECK (max_group_size >= 1),
            difficulty TEXT NOT NULL DEFAULT 'medium',
            featured BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        ",
        // No foreign key from bookings to packages: bookings outlive
        // package deletion and degrade to an absent snapshot on reads.
        r"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL,
            package_id UUID NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            booking_date DATE NOT NULL,
            number_of_people INTEGER NOT NULL CHECK (number_of_people >= 1),
            duration TEXT NOT NULL,
            total_price DOUBLE PRECISION NOT NULL,
            special_requests TEXT,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        ",
        r"
        CREATE INDEX IF NOT EXISTS idx_bookings_user_created
            ON bookings (user_id, created_at DESC)
        ",
        r"
        CREATE INDEX IF NOT EXISTS idx_bookings_created
            ON bookings (created_at DESC)
        ",
        r"
        CREATE TABLE IF NOT EXISTS feedback (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            subject TEXT NOT NULL,
            message TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        ",
        r"
        CREATE INDEX IF NOT EXISTS idx_feedback_created
            ON feedback (created_at DESC)
        ",
        // Written by the external identity system, read-only here.
        r"
        CREATE TABLE IF NOT EXISTS identity_users (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        )
        ",
        r"
        CREATE TABLE IF NOT EXISTS identity_sessions (
            token TEXT PRIMARY KEY,
            user_id UUID NOT NULL,
            role TEXT NOT NULL DEFAULT 'user',
            expires_at TIMESTAMPTZ
        )
        ",
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(db_err)?;
    }

    tracing::info!("Database schema ready");
    Ok(())
}
