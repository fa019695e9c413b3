use std::sync::Arc;

use crate::core::error::Result;
use crate::features::regions::models::{City, Province};
use crate::features::regions::store::ReferenceStore;

/// Service backing the province/city cascading dropdowns
pub struct RegionService {
    store: Arc<dyn ReferenceStore>,
}

impl RegionService {
    pub fn new(store: Arc<dyn ReferenceStore>) -> Self {
        Self { store }
    }

    /// All provinces in the store's name order
    pub async fn list_provinces(&self) -> Result<Vec<Province>> {
        self.store.list_provinces().await
    }

    /// Cities belonging to `province_id` in the store's name order.
    ///
    /// An unknown province yields an empty list rather than an error; the
    /// dropdown re-queries on every province change including "none selected".
    pub async fn list_cities_by_province(&self, province_id: i32) -> Result<Vec<City>> {
        self.store.list_cities_by_province(province_id).await
    }
}
