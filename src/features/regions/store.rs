use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{City, Province};

/// Read access to the province/city reference data.
///
/// Provinces and cities are seeded outside this service; nothing here mutates them.
#[async_trait]
pub trait ReferenceStore: Send + Sync {
    /// All provinces, ordered by name ascending
    async fn list_provinces(&self) -> Result<Vec<Province>>;

    /// Cities of one province, ordered by name ascending
    async fn list_cities_by_province(&self, province_id: i32) -> Result<Vec<City>>;

    async fn find_province_name(&self, id: i32) -> Result<Option<String>>;

    async fn find_city_name(&self, id: i32) -> Result<Option<String>>;

    /// Exact (case-sensitive) name match; lowest id wins
    async fn find_province_id_by_name(&self, name: &str) -> Result<Option<i32>>;

    /// Exact (case-sensitive) name match; lowest id wins.
    ///
    /// With `province_id` only that province's cities are considered, otherwise all.
    async fn find_city_id_by_name(
        &self,
        name: &str,
        province_id: Option<i32>,
    ) -> Result<Option<i32>>;
}

/// PostgreSQL-backed reference store
pub struct PgReferenceStore {
    pool: PgPool,
}

impl PgReferenceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceStore for PgReferenceStore {
    async fn list_provinces(&self) -> Result<Vec<Province>> {
        sqlx::query_as::<_, Province>(
            r#"
            SELECT id, name
            FROM provinces
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch provinces: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_cities_by_province(&self, province_id: i32) -> Result<Vec<City>> {
        sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, province_id
            FROM cities
            WHERE province_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(province_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch cities for province {}: {:?}",
                province_id,
                e
            );
            AppError::Database(e)
        })
    }

    async fn find_province_name(&self, id: i32) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT name FROM provinces WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch province {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn find_city_name(&self, id: i32) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT name FROM cities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch city {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn find_province_id_by_name(&self, name: &str) -> Result<Option<i32>> {
        sqlx::query_scalar::<_, i32>(
            "SELECT id FROM provinces WHERE name = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up province named {}: {:?}", name, e);
            AppError::Database(e)
        })
    }

    async fn find_city_id_by_name(
        &self,
        name: &str,
        province_id: Option<i32>,
    ) -> Result<Option<i32>> {
        sqlx::query_scalar::<_, i32>(
            r#"
            SELECT id
            FROM cities
            WHERE name = $1 AND ($2::INT IS NULL OR province_id = $2)
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(name)
        .bind(province_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up city named {}: {:?}", name, e);
            AppError::Database(e)
        })
    }
}
