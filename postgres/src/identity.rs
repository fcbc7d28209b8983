//! PostgreSQL identity resolver.
//!
//! Reads the `identity_sessions` / `identity_users` tables maintained by
//! the external identity system. Token issuance never happens here.

use crate::db_err;
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;
use wayfarer_core::{BookingError, IdentityResolver, Principal, Result, Role, UserSnapshot};

/// Identity resolver backed by session rows.
#[derive(Clone)]
pub struct PostgresIdentityResolver {
    pool: PgPool,
}

impl PostgresIdentityResolver {
    /// Create a resolver over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityResolver for PostgresIdentityResolver {
    async fn resolve(&self, bearer_token: &str) -> Result<Principal> {
        let row = sqlx::query(
            r"
            SELECT user_id, role FROM identity_sessions
            WHERE token = $1 AND (expires_at IS NULL OR expires_at > NOW())
            ",
        )
        .bind(bearer_token)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?
        .ok_or(BookingError::Unauthorized)?;

        let user_id: Uuid = row.try_get("user_id").map_err(db_err)?;
        let role: String = row.try_get("role").map_err(db_err)?;
        // Only the admin flag matters; anything else is a regular user.
        let role = if role == "admin" { Role::Admin } else { Role::User };

        Ok(Principal::new(user_id, role))
    }

    async fn user_snapshot(&self, user_id: Uuid) -> Result<Option<UserSnapshot>> {
        let row = sqlx::query("SELECT id, name, email FROM identity_users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.map(|row| {
            Ok(UserSnapshot {
                id: row.try_get("id").map_err(db_err)?,
                name: row.try_get("name").map_err(db_err)?,
                email: row.try_get("email").map_err(db_err)?,
            })
        })
        .transpose()
    }
}
