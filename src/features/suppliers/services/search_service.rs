//! Supplier search: turns optional filter fields into a [`SupplierQuery`] and runs it.
//!
//! Province and city filters arrive as reference ids but suppliers store names, so
//! each id is first resolved to its current name. An id that resolves to nothing
//! drops that filter entirely (every row passes) rather than matching nothing.

use crate::core::error::Result;
use crate::features::regions::services::name_resolution::{resolve_city_name, resolve_province_name};
use crate::features::regions::store::ReferenceStore;
use crate::features::suppliers::models::Supplier;
use crate::features::suppliers::query::{SupplierPredicate, SupplierQuery};
use crate::features::suppliers::store::SupplierStore;

/// Optional filter fields; `None` or empty means "don't filter"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierFilter {
    pub code: Option<String>,
    pub province_id: Option<i32>,
    pub city_id: Option<i32>,
    /// Exact stored province name (list API only)
    pub province_name: Option<String>,
    /// Exact stored city name (list API only)
    pub city_name: Option<String>,
}

/// Which columns the free-text filter is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeMatch {
    /// Search form: supplier code only
    Code,
    /// List API: supplier code or supplier name
    CodeOrName,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn selected(id: Option<i32>) -> Option<i32> {
    id.filter(|id| *id > 0)
}

/// Build the conjunctive supplier query for `filter`
pub async fn build_supplier_query(
    regions: &dyn ReferenceStore,
    filter: &SupplierFilter,
    code_match: CodeMatch,
) -> Result<SupplierQuery> {
    let mut query = SupplierQuery::new();

    if let Some(term) = non_empty(filter.code.as_deref()) {
        let term = term.to_string();
        query = query.and(match code_match {
            CodeMatch::Code => SupplierPredicate::CodeContains(term),
            CodeMatch::CodeOrName => SupplierPredicate::CodeOrNameContains(term),
        });
    }

    if let Some(province_id) = selected(filter.province_id) {
        match resolve_province_name(regions, Some(province_id)).await? {
            Some(name) if !name.is_empty() => {
                query = query.and(SupplierPredicate::ProvinceIs(name));
            }
            _ => tracing::debug!(
                "Ignoring province filter: id {} has no name",
                province_id
            ),
        }
    }

    if let Some(city_id) = selected(filter.city_id) {
        match resolve_city_name(regions, Some(city_id)).await? {
            Some(name) if !name.is_empty() => {
                query = query.and(SupplierPredicate::CityIs(name));
            }
            _ => tracing::debug!("Ignoring city filter: id {} has no name", city_id),
        }
    }

    if let Some(name) = non_empty(filter.province_name.as_deref()) {
        query = query.and(SupplierPredicate::ProvinceIsExactly(name.to_string()));
    }

    if let Some(name) = non_empty(filter.city_name.as_deref()) {
        query = query.and(SupplierPredicate::CityIsExactly(name.to_string()));
    }

    Ok(query)
}

/// Resolve `filter` and fetch the matching suppliers in store order
pub async fn find_suppliers(
    suppliers: &dyn SupplierStore,
    regions: &dyn ReferenceStore,
    filter: &SupplierFilter,
    code_match: CodeMatch,
) -> Result<Vec<Supplier>> {
    let query = build_supplier_query(regions, filter, code_match).await?;
    suppliers.query(&query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryStore;

    /// Seeded reference data plus a handful of suppliers
    fn store() -> InMemoryStore {
        let store = InMemoryStore::seeded();
        store.put_supplier("abc123", "Acme", Some("West"), Some("Springfield"));
        store.put_supplier("XYZ-9", "Abc Logistics", Some("west"), Some("Oakdale"));
        store.put_supplier("DEF-1", "Delta", Some("East"), Some("Riverside"));
        store.put_supplier("GHI-2", "Gamma", None, None);
        store
    }

    async fn codes(store: &InMemoryStore, filter: SupplierFilter, code_match: CodeMatch) -> Vec<String> {
        find_suppliers(store, store, &filter, code_match)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.code)
            .collect()
    }

    #[tokio::test]
    async fn test_no_filter_returns_all_in_store_order() {
        let store = store();
        assert_eq!(
            codes(&store, SupplierFilter::default(), CodeMatch::Code).await,
            vec!["abc123", "XYZ-9", "DEF-1", "GHI-2"]
        );
    }

    #[tokio::test]
    async fn test_code_filter_is_case_insensitive_substring() {
        let store = store();
        let filter = SupplierFilter {
            code: Some("ABC".into()),
            ..Default::default()
        };
        assert_eq!(codes(&store, filter, CodeMatch::Code).await, vec!["abc123"]);
    }

    #[tokio::test]
    async fn test_list_match_also_searches_name() {
        let store = store();
        let filter = SupplierFilter {
            code: Some("ABC".into()),
            ..Default::default()
        };
        assert_eq!(
            codes(&store, filter, CodeMatch::CodeOrName).await,
            vec!["abc123", "XYZ-9"]
        );
    }

    #[tokio::test]
    async fn test_empty_code_filter_is_ignored() {
        let store = store();
        let filter = SupplierFilter {
            code: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(codes(&store, filter, CodeMatch::Code).await.len(), 4);
    }

    #[tokio::test]
    async fn test_province_filter_matches_name_ignoring_case() {
        let store = store();
        let filter = SupplierFilter {
            province_id: Some(1),
            ..Default::default()
        };
        assert_eq!(
            codes(&store, filter, CodeMatch::Code).await,
            vec!["abc123", "XYZ-9"]
        );
    }

    #[tokio::test]
    async fn test_unknown_province_is_a_no_op() {
        let store = store();
        let unfiltered = codes(&store, SupplierFilter::default(), CodeMatch::Code).await;
        let filter = SupplierFilter {
            province_id: Some(999),
            ..Default::default()
        };
        assert_eq!(codes(&store, filter, CodeMatch::Code).await, unfiltered);
    }

    #[tokio::test]
    async fn test_zero_and_negative_ids_are_ignored() {
        let store = store();
        let filter = SupplierFilter {
            province_id: Some(0),
            city_id: Some(-1),
            ..Default::default()
        };
        let query = build_supplier_query(&store, &filter, CodeMatch::Code)
            .await
            .unwrap();
        assert!(query.is_empty());
    }

    #[tokio::test]
    async fn test_filters_compose_with_and() {
        let store = store();
        let filter = SupplierFilter {
            code: Some("XYZ".into()),
            province_id: Some(1),
            city_id: Some(6),
            ..Default::default()
        };
        assert_eq!(codes(&store, filter, CodeMatch::Code).await, vec!["XYZ-9"]);

        let filter = SupplierFilter {
            code: Some("abc".into()),
            province_id: Some(1),
            city_id: Some(6),
            ..Default::default()
        };
        assert!(codes(&store, filter, CodeMatch::Code).await.is_empty());
    }

    #[tokio::test]
    async fn test_exact_name_filters_are_case_sensitive() {
        let store = store();
        let filter = SupplierFilter {
            province_name: Some("West".into()),
            ..Default::default()
        };
        assert_eq!(
            codes(&store, filter, CodeMatch::CodeOrName).await,
            vec!["abc123"]
        );

        let filter = SupplierFilter {
            city_name: Some("Riverside".into()),
            ..Default::default()
        };
        assert_eq!(
            codes(&store, filter, CodeMatch::CodeOrName).await,
            vec!["DEF-1"]
        );
    }

    #[tokio::test]
    async fn test_renamed_province_no_longer_matches_old_snapshot() {
        let store = store();
        store.rename_province(1, "Far West");

        let filter = SupplierFilter {
            province_id: Some(1),
            ..Default::default()
        };
        // Stored names are snapshots; the rename is not propagated
        assert!(codes(&store, filter, CodeMatch::Code).await.is_empty());
    }
}
