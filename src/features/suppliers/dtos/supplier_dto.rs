use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::regions::dtos::SelectOptionDto;
use crate::features::suppliers::models::Supplier;
use crate::features::suppliers::services::SupplierFilter;
use crate::shared::constants::{
    SUPPLIER_ADDRESS_MAX_LEN, SUPPLIER_CODE_MAX_LEN, SUPPLIER_CONTACT_MAX_LEN,
    SUPPLIER_NAME_MAX_LEN,
};
use crate::shared::validation::empty_string_as_none;

// ==================== Query DTOs ====================

/// Filters of the supplier search form (matches on code only)
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SupplierSearchQuery {
    /// Case-insensitive substring of the supplier code
    #[param(example = "sup")]
    pub supplier_code_filter: Option<String>,

    /// Province dropdown selection; empty or unknown means "all"
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub selected_province_id: Option<i32>,

    /// City dropdown selection; empty or unknown means "all"
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub selected_city_id: Option<i32>,
}

impl From<SupplierSearchQuery> for SupplierFilter {
    fn from(query: SupplierSearchQuery) -> Self {
        Self {
            code: query.supplier_code_filter,
            province_id: query.selected_province_id,
            city_id: query.selected_city_id,
            ..Default::default()
        }
    }
}

/// Filters of the supplier list API (matches on code or name)
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SupplierListQuery {
    /// Case-insensitive substring of the supplier code or name
    pub code: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub province_id: Option<i32>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub city_id: Option<i32>,

    /// Exact stored province name
    pub province: Option<String>,

    /// Exact stored city name
    pub city: Option<String>,
}

impl From<SupplierListQuery> for SupplierFilter {
    fn from(query: SupplierListQuery) -> Self {
        Self {
            code: query.code,
            province_id: query.province_id,
            city_id: query.city_id,
            province_name: query.province,
            city_name: query.city,
        }
    }
}

// ==================== Request DTOs ====================

/// Create request. Ids of province/city are resolved to names before saving.
///
/// Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierDto {
    #[validate(length(max = SUPPLIER_CODE_MAX_LEN))]
    pub code: Option<String>,

    #[validate(length(max = SUPPLIER_NAME_MAX_LEN))]
    pub name: Option<String>,

    pub province_id: Option<i32>,

    pub city_id: Option<i32>,

    #[validate(length(max = SUPPLIER_ADDRESS_MAX_LEN))]
    pub address: Option<String>,

    #[validate(length(max = SUPPLIER_CONTACT_MAX_LEN))]
    pub contact_person: Option<String>,
}

/// Update request. The supplier code cannot be changed and is ignored if sent.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplierDto {
    #[validate(length(max = SUPPLIER_NAME_MAX_LEN))]
    pub name: Option<String>,

    #[validate(length(max = SUPPLIER_CONTACT_MAX_LEN))]
    pub contact_person: Option<String>,

    /// `null` clears the stored province name
    pub province_id: Option<i32>,

    /// `null` clears the stored city name
    pub city_id: Option<i32>,

    #[validate(length(max = SUPPLIER_ADDRESS_MAX_LEN))]
    pub address: Option<String>,
}

/// Bulk delete request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DeleteSuppliersDto {
    #[serde(default)]
    pub ids: Vec<i32>,
}

// ==================== Response DTOs ====================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierResponseDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub province: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub contact_person: Option<String>,
}

impl From<Supplier> for SupplierResponseDto {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            code: supplier.code,
            name: supplier.name,
            province: supplier.province,
            city: supplier.city,
            address: supplier.address,
            contact_person: supplier.contact_person,
        }
    }
}

/// Supplier with province/city names mapped back to reference ids.
///
/// `provinceId`/`cityId` are `0` when the stored name no longer matches any
/// reference record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDetailDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub province: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub province_id: i32,
    pub city_id: i32,
}

impl SupplierDetailDto {
    pub fn new(supplier: Supplier, province_id: i32, city_id: i32) -> Self {
        Self {
            id: supplier.id,
            code: supplier.code,
            name: supplier.name,
            province: supplier.province,
            city: supplier.city,
            address: supplier.address,
            contact_person: supplier.contact_person,
            province_id,
            city_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierSearchResultDto {
    pub suppliers: Vec<SupplierResponseDto>,
    pub has_results: bool,
}

impl SupplierSearchResultDto {
    pub fn new(suppliers: Vec<Supplier>) -> Self {
        let suppliers: Vec<SupplierResponseDto> = suppliers.into_iter().map(Into::into).collect();
        Self {
            has_results: !suppliers.is_empty(),
            suppliers,
        }
    }
}

/// Initial data of the supplier screen: every supplier plus the province dropdown
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierIndexDto {
    pub suppliers: Vec<SupplierResponseDto>,
    pub has_results: bool,
    pub province_list: Vec<SelectOptionDto>,
    pub selected_province_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSuppliersResponseDto {
    pub deleted_count: u64,
}
