use serde::Serialize;
use sqlx::FromRow;

/// Province master record (read-only reference data)
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Province {
    pub id: i32,
    pub name: String,
}
