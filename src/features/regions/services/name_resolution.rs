//! Translation between reference-data ids and the display names stored on suppliers.
//!
//! Suppliers keep a snapshot of the province/city *name* taken at write time. A miss
//! in either direction is a normal outcome, never an error: forward lookups yield
//! `None`, reverse lookups yield `0`.

use crate::core::error::Result;
use crate::features::regions::store::ReferenceStore;

/// Id reported when a stored name no longer matches any reference record
pub const UNRESOLVED_ID: i32 = 0;

/// Current name of the province with the given id, if any
pub async fn resolve_province_name(
    store: &dyn ReferenceStore,
    id: Option<i32>,
) -> Result<Option<String>> {
    let Some(id) = id else {
        return Ok(None);
    };

    let name = store.find_province_name(id).await?;
    if name.is_none() {
        tracing::debug!("Province id {} did not resolve to a name", id);
    }
    Ok(name)
}

/// Current name of the city with the given id, if any
pub async fn resolve_city_name(store: &dyn ReferenceStore, id: Option<i32>) -> Result<Option<String>> {
    let Some(id) = id else {
        return Ok(None);
    };

    let name = store.find_city_name(id).await?;
    if name.is_none() {
        tracing::debug!("City id {} did not resolve to a name", id);
    }
    Ok(name)
}

/// Best-effort reverse lookup of a stored province name.
///
/// Returns [`UNRESOLVED_ID`] when the name is absent or unknown, so callers cannot
/// tell "no province" from "renamed province".
pub async fn resolve_province_id(store: &dyn ReferenceStore, name: Option<&str>) -> Result<i32> {
    match name {
        Some(name) => Ok(store
            .find_province_id_by_name(name)
            .await?
            .unwrap_or(UNRESOLVED_ID)),
        None => Ok(UNRESOLVED_ID),
    }
}

/// Best-effort reverse lookup of a stored city name, see [`resolve_province_id`].
///
/// A resolved `province_id` restricts the match to that province's cities, so the
/// pair stays consistent when several provinces share a city name. With
/// [`UNRESOLVED_ID`] every province is searched.
pub async fn resolve_city_id(
    store: &dyn ReferenceStore,
    name: Option<&str>,
    province_id: i32,
) -> Result<i32> {
    let Some(name) = name else {
        return Ok(UNRESOLVED_ID);
    };

    let scope = (province_id != UNRESOLVED_ID).then_some(province_id);
    Ok(store
        .find_city_id_by_name(name, scope)
        .await?
        .unwrap_or(UNRESOLVED_ID))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryStore;

    #[tokio::test]
    async fn test_forward_resolution() {
        let store = InMemoryStore::seeded();

        assert_eq!(
            resolve_province_name(&store, Some(1)).await.unwrap(),
            Some("West".to_string())
        );
        assert_eq!(
            resolve_city_name(&store, Some(5)).await.unwrap(),
            Some("Springfield".to_string())
        );
    }

    #[tokio::test]
    async fn test_forward_resolution_misses_are_silent() {
        let store = InMemoryStore::seeded();

        assert_eq!(resolve_province_name(&store, None).await.unwrap(), None);
        assert_eq!(resolve_province_name(&store, Some(999)).await.unwrap(), None);
        assert_eq!(resolve_city_name(&store, None).await.unwrap(), None);
        assert_eq!(resolve_city_name(&store, Some(-3)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_reverse_resolution_defaults_to_zero() {
        let store = InMemoryStore::seeded();

        assert_eq!(resolve_province_id(&store, Some("West")).await.unwrap(), 1);
        assert_eq!(
            resolve_city_id(&store, Some("Springfield"), UNRESOLVED_ID)
                .await
                .unwrap(),
            5
        );

        // Exact match only
        assert_eq!(
            resolve_province_id(&store, Some("west")).await.unwrap(),
            UNRESOLVED_ID
        );
        assert_eq!(
            resolve_city_id(&store, Some("Atlantis"), 1).await.unwrap(),
            UNRESOLVED_ID
        );
        assert_eq!(
            resolve_city_id(&store, None, 1).await.unwrap(),
            UNRESOLVED_ID
        );
    }

    #[tokio::test]
    async fn test_city_reverse_lookup_is_scoped_to_province() {
        // Springfield exists in West (5) and, later seeded, in East (10)
        let store = InMemoryStore::seeded().with_city(10, "Springfield", 2);

        assert_eq!(
            resolve_city_id(&store, Some("Springfield"), 2).await.unwrap(),
            10
        );
        assert_eq!(
            resolve_city_id(&store, Some("Springfield"), 1).await.unwrap(),
            5
        );
        // Unknown province: lowest id across all provinces
        assert_eq!(
            resolve_city_id(&store, Some("Springfield"), UNRESOLVED_ID)
                .await
                .unwrap(),
            5
        );
        // Name exists, but not in the given province
        assert_eq!(
            resolve_city_id(&store, Some("Riverside"), 1).await.unwrap(),
            UNRESOLVED_ID
        );
    }
}
