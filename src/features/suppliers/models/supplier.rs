use serde::Serialize;
use sqlx::FromRow;

/// Supplier master record.
///
/// `province` and `city` hold display names copied from the reference data when
/// the record was written. They are not foreign keys: renaming or removing a
/// province later leaves existing suppliers untouched.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Supplier {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub province: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    /// Optimistic concurrency token, bumped on every update
    pub version: i32,
}

/// Normalized input for inserting a supplier; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewSupplier {
    pub code: String,
    pub name: String,
    pub province: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub contact_person: Option<String>,
}

/// Replaceable fields of an existing supplier. `code` is deliberately absent.
#[derive(Debug, Clone)]
pub struct SupplierChanges {
    pub name: String,
    pub province: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub contact_person: Option<String>,
}
