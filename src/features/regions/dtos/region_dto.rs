use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::{City, Province};
use crate::shared::validation::empty_string_as_none;

/// Query parameters for the cascading city dropdown
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CityLookupQuery {
    /// Selected province; missing, empty or unknown yields an empty list
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[param(example = 1)]
    pub province_id: Option<i32>,
}

/// Response DTO for province data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceResponseDto {
    pub id: i32,
    pub name: String,
}

impl From<Province> for ProvinceResponseDto {
    fn from(province: Province) -> Self {
        Self {
            id: province.id,
            name: province.name,
        }
    }
}

/// Response DTO for city data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityResponseDto {
    pub id: i32,
    pub name: String,
    pub province_id: i32,
}

impl From<City> for CityResponseDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            province_id: city.province_id,
        }
    }
}

/// One option of a selection list (`value` = id, `label` = display name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectOptionDto {
    pub value: i32,
    pub label: String,
}

impl From<Province> for SelectOptionDto {
    fn from(province: Province) -> Self {
        Self {
            value: province.id,
            label: province.name,
        }
    }
}

impl From<City> for SelectOptionDto {
    fn from(city: City) -> Self {
        Self {
            value: city.id,
            label: city.name,
        }
    }
}
