use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::suppliers::models::{NewSupplier, Supplier, SupplierChanges};
use crate::features::suppliers::query::SupplierQuery;

const SUPPLIER_COLUMNS: &str = "id, code, name, province, city, address, contact_person, version";

/// Persistence contract for supplier records
#[async_trait]
pub trait SupplierStore: Send + Sync {
    /// Suppliers matching `query`, in insertion (id) order
    async fn query(&self, query: &SupplierQuery) -> Result<Vec<Supplier>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Supplier>>;

    /// Existing suppliers among `ids`; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Supplier>>;

    /// Insert and return the stored row with its generated id.
    ///
    /// An exact duplicate `code` fails with [`AppError::Conflict`].
    async fn insert(&self, supplier: NewSupplier) -> Result<Supplier>;

    /// Apply `changes` if the row still carries `expected_version`.
    ///
    /// Returns `None` when the row was modified or removed since it was read.
    async fn update(
        &self,
        id: i32,
        expected_version: i32,
        changes: SupplierChanges,
    ) -> Result<Option<Supplier>>;

    /// Delete the given ids in one statement, returning the number removed
    async fn delete_many(&self, ids: &[i32]) -> Result<u64>;
}

/// PostgreSQL-backed supplier store
pub struct PgSupplierStore {
    pool: PgPool,
}

impl PgSupplierStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupplierStore for PgSupplierStore {
    async fn query(&self, query: &SupplierQuery) -> Result<Vec<Supplier>> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM suppliers", SUPPLIER_COLUMNS));
        query.push_where(&mut builder);
        builder.push(" ORDER BY id ASC");

        builder
            .build_query_as::<Supplier>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query suppliers: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Supplier>> {
        sqlx::query_as::<_, Supplier>(&format!(
            "SELECT {} FROM suppliers WHERE id = $1",
            SUPPLIER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch supplier {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Supplier>> {
        sqlx::query_as::<_, Supplier>(&format!(
            "SELECT {} FROM suppliers WHERE id = ANY($1) ORDER BY id ASC",
            SUPPLIER_COLUMNS
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch suppliers {:?}: {:?}", ids, e);
            AppError::Database(e)
        })
    }

    async fn insert(&self, supplier: NewSupplier) -> Result<Supplier> {
        sqlx::query_as::<_, Supplier>(&format!(
            r#"
            INSERT INTO suppliers (code, name, province, city, address, contact_person)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            SUPPLIER_COLUMNS
        ))
        .bind(supplier.code)
        .bind(supplier.name)
        .bind(supplier.province)
        .bind(supplier.city)
        .bind(supplier.address)
        .bind(supplier.contact_person)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn update(
        &self,
        id: i32,
        expected_version: i32,
        changes: SupplierChanges,
    ) -> Result<Option<Supplier>> {
        sqlx::query_as::<_, Supplier>(&format!(
            r#"
            UPDATE suppliers
            SET name = $1,
                province = $2,
                city = $3,
                address = $4,
                contact_person = $5,
                version = version + 1
            WHERE id = $6 AND version = $7
            RETURNING {}
            "#,
            SUPPLIER_COLUMNS
        ))
        .bind(changes.name)
        .bind(changes.province)
        .bind(changes.city)
        .bind(changes.address)
        .bind(changes.contact_person)
        .bind(id)
        .bind(expected_version)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn delete_many(&self, ids: &[i32]) -> Result<u64> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected())
    }
}
