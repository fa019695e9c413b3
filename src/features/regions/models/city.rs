use serde::Serialize;
use sqlx::FromRow;

/// City master record, owned by exactly one province
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub province_id: i32,
}
