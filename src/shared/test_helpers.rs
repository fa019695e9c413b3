//! In-memory stores and service builders for tests.
//!
//! [`InMemoryStore`] implements both storage traits with the same observable
//! semantics as PostgreSQL: insertion order, exact-match unique codes, and
//! version-checked updates.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::core::config::ExportConfig;
use crate::core::error::{AppError, Result};
use crate::features::regions::models::{City, Province};
use crate::features::regions::store::ReferenceStore;
use crate::features::regions::RegionService;
use crate::features::suppliers::models::{NewSupplier, Supplier, SupplierChanges};
use crate::features::suppliers::query::SupplierQuery;
use crate::features::suppliers::store::SupplierStore;
use crate::features::suppliers::SupplierService;

#[derive(Default)]
struct State {
    provinces: Vec<Province>,
    cities: Vec<City>,
    suppliers: Vec<Supplier>,
    last_supplier_id: i32,
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference data used across tests:
    ///
    /// - 1 West: 5 Springfield, 6 Oakdale, 9 Brookfield
    /// - 2 East: 7 Riverside, 8 Ashford
    /// - 3 North: (no cities)
    pub fn seeded() -> Self {
        Self::new()
            .with_province(1, "West")
            .with_province(2, "East")
            .with_province(3, "North")
            .with_city(5, "Springfield", 1)
            .with_city(6, "Oakdale", 1)
            .with_city(7, "Riverside", 2)
            .with_city(8, "Ashford", 2)
            .with_city(9, "Brookfield", 1)
    }

    pub fn with_province(self, id: i32, name: &str) -> Self {
        self.lock().provinces.push(Province {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn with_city(self, id: i32, name: &str, province_id: i32) -> Self {
        self.lock().cities.push(City {
            id,
            name: name.to_string(),
            province_id,
        });
        self
    }

    /// Simulate an external rename of reference data
    pub fn rename_province(&self, id: i32, name: &str) {
        if let Some(p) = self.lock().provinces.iter_mut().find(|p| p.id == id) {
            p.name = name.to_string();
        }
    }

    /// Insert a supplier row directly, bypassing validation and name resolution
    pub fn put_supplier(
        &self,
        code: &str,
        name: &str,
        province: Option<&str>,
        city: Option<&str>,
    ) -> Supplier {
        let mut state = self.lock();
        state.last_supplier_id += 1;
        let supplier = Supplier {
            id: state.last_supplier_id,
            code: code.to_string(),
            name: name.to_string(),
            province: province.map(str::to_string),
            city: city.map(str::to_string),
            address: None,
            contact_person: None,
            version: 1,
        };
        state.suppliers.push(supplier.clone());
        supplier
    }

    /// Snapshot of every stored supplier in insertion order
    pub fn suppliers(&self) -> Vec<Supplier> {
        self.lock().suppliers.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl ReferenceStore for InMemoryStore {
    async fn list_provinces(&self) -> Result<Vec<Province>> {
        let mut provinces = self.lock().provinces.clone();
        provinces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(provinces)
    }

    async fn list_cities_by_province(&self, province_id: i32) -> Result<Vec<City>> {
        let mut cities: Vec<City> = self
            .lock()
            .cities
            .iter()
            .filter(|c| c.province_id == province_id)
            .cloned()
            .collect();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cities)
    }

    async fn find_province_name(&self, id: i32) -> Result<Option<String>> {
        Ok(self
            .lock()
            .provinces
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone()))
    }

    async fn find_city_name(&self, id: i32) -> Result<Option<String>> {
        Ok(self
            .lock()
            .cities
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone()))
    }

    async fn find_province_id_by_name(&self, name: &str) -> Result<Option<i32>> {
        Ok(self
            .lock()
            .provinces
            .iter()
            .filter(|p| p.name == name)
            .map(|p| p.id)
            .min())
    }

    async fn find_city_id_by_name(
        &self,
        name: &str,
        province_id: Option<i32>,
    ) -> Result<Option<i32>> {
        Ok(self
            .lock()
            .cities
            .iter()
            .filter(|c| c.name == name)
            .filter(|c| match province_id {
                Some(p) => c.province_id == p,
                None => true,
            })
            .map(|c| c.id)
            .min())
    }
}

#[async_trait]
impl SupplierStore for InMemoryStore {
    async fn query(&self, query: &SupplierQuery) -> Result<Vec<Supplier>> {
        Ok(self
            .lock()
            .suppliers
            .iter()
            .filter(|s| query.matches(s))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Supplier>> {
        Ok(self.lock().suppliers.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Supplier>> {
        Ok(self
            .lock()
            .suppliers
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect())
    }

    async fn insert(&self, supplier: NewSupplier) -> Result<Supplier> {
        let mut state = self.lock();
        if state.suppliers.iter().any(|s| s.code == supplier.code) {
            return Err(AppError::Conflict(
                "A supplier with this code already exists. Please use a different code."
                    .to_string(),
            ));
        }

        state.last_supplier_id += 1;
        let stored = Supplier {
            id: state.last_supplier_id,
            code: supplier.code,
            name: supplier.name,
            province: supplier.province,
            city: supplier.city,
            address: supplier.address,
            contact_person: supplier.contact_person,
            version: 1,
        };
        state.suppliers.push(stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        id: i32,
        expected_version: i32,
        changes: SupplierChanges,
    ) -> Result<Option<Supplier>> {
        let mut state = self.lock();
        let Some(row) = state
            .suppliers
            .iter_mut()
            .find(|s| s.id == id && s.version == expected_version)
        else {
            return Ok(None);
        };

        row.name = changes.name;
        row.province = changes.province;
        row.city = changes.city;
        row.address = changes.address;
        row.contact_person = changes.contact_person;
        row.version += 1;
        Ok(Some(row.clone()))
    }

    async fn delete_many(&self, ids: &[i32]) -> Result<u64> {
        let mut state = self.lock();
        let before = state.suppliers.len();
        state.suppliers.retain(|s| !ids.contains(&s.id));
        Ok((before - state.suppliers.len()) as u64)
    }
}

pub fn region_service(store: Arc<InMemoryStore>) -> Arc<RegionService> {
    Arc::new(RegionService::new(store))
}

pub fn supplier_service(store: Arc<InMemoryStore>) -> Arc<SupplierService> {
    Arc::new(SupplierService::new(
        store.clone(),
        store,
        &ExportConfig::default(),
    ))
}
