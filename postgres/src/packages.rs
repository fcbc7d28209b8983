//! PostgreSQL package store.

use crate::db_err;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;
use wayfarer_core::{Difficulty, Package, PackageStore, Result};

const PACKAGE_COLUMNS: &str = "id, title, location, price, description, image, \
     duration, max_group_size, difficulty, featured, created_at, updated_at";

/// Package store backed by the `packages` table.
#[derive(Clone)]
pub struct PostgresPackageStore {
    pool: PgPool,
}

impl PostgresPackageStore {
    /// Create a store over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_package(row: &PgRow) -> Result<Package> {
        let difficulty: String = row.try_get("difficulty").map_err(db_err)?;
        Ok(Package {
            id: row.try_get("id").map_err(db_err)?,
            title: row.try_get("title").map_err(db_err)?,
            location: row.try_get("location").map_err(db_err)?,
            price: row.try_get("price").map_err(db_err)?,
            description: row.try_get("description").map_err(db_err)?,
            image: row.try_get("image").map_err(db_err)?,
            duration: row.try_get("duration").map_err(db_err)?,
            max_group_size: row.try_get("max_group_size").map_err(db_err)?,
            difficulty: Difficulty::parse_lossy(&difficulty),
            featured: row.try_get("featured").map_err(db_err)?,
            created_at: row.try_get("created_at").map_err(db_err)?,
            updated_at: row.try_get("updated_at").map_err(db_err)?,
        })
    }
}

#[async_trait]
impl PackageStore for PostgresPackageStore {
    async fn insert(&self, package: &Package) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO packages (
                id, title, location, price, description, image,
                duration, max_group_size, difficulty, featured,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(package.id)
        .bind(&package.title)
        .bind(&package.location)
        .bind(package.price)
        .bind(&package.description)
        .bind(&package.image)
        .bind(&package.duration)
        .bind(package.max_group_size)
        .bind(package.difficulty.as_str())
        .bind(package.featured)
        .bind(package.created_at)
        .bind(package.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn update(&self, package: &Package) -> Result<bool> {
        let result = sqlx::query(
            r"
            UPDATE packages SET
                title = $2, location = $3, price = $4, description = $5,
                image = $6, duration = $7, max_group_size = $8,
                difficulty = $9, featured = $10, updated_at = $11
            WHERE id = $1
            ",
        )
        .bind(package.id)
        .bind(&package.title)
        .bind(&package.location)
        .bind(package.price)
        .bind(&package.description)
        .bind(&package.image)
        .bind(&package.duration)
        .bind(package.max_group_size)
        .bind(package.difficulty.as_str())
        .bind(package.featured)
        .bind(package.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, package_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM packages WHERE id = $1")
            .bind(package_id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected() > 0)
    }

    async fn get(&self, package_id: Uuid) -> Result<Option<Package>> {
        let row = sqlx::query(&format!(
            "SELECT {PACKAGE_COLUMNS} FROM packages WHERE id = $1"
        ))
        .bind(package_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(Self::row_to_package).transpose()
    }

    async fn list(&self) -> Result<Vec<Package>> {
        let rows = sqlx::query(&format!(
            "SELECT {PACKAGE_COLUMNS} FROM packages ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(Self::row_to_package).collect()
    }
}
