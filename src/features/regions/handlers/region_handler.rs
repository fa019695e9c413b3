use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::regions::dtos::{
    CityLookupQuery, CityResponseDto, ProvinceResponseDto, SelectOptionDto,
};
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

/// List all provinces sorted by name
#[utoipa::path(
    get,
    path = "/api/provinces",
    responses(
        (status = 200, description = "List of provinces", body = ApiResponse<Vec<ProvinceResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_provinces(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<ProvinceResponseDto>>>> {
    let provinces = service.list_provinces().await?;
    let dtos: Vec<ProvinceResponseDto> = provinces.into_iter().map(Into::into).collect();
    let meta = Meta::total_of(&dtos);
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

/// List cities in a province sorted by name
#[utoipa::path(
    get,
    path = "/api/provinces/{id}/cities",
    params(
        ("id" = i32, Path, description = "Province ID")
    ),
    responses(
        (status = 200, description = "List of cities in the province", body = ApiResponse<Vec<CityResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_cities_by_province(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Vec<CityResponseDto>>>> {
    let cities = service.list_cities_by_province(id).await?;
    let dtos: Vec<CityResponseDto> = cities.into_iter().map(Into::into).collect();
    let meta = Meta::total_of(&dtos);
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

/// City dropdown options for the selected province
#[utoipa::path(
    get,
    path = "/api/supplier/cities",
    params(CityLookupQuery),
    responses(
        (status = 200, description = "City options sorted by name", body = ApiResponse<Vec<SelectOptionDto>>),
        (status = 400, description = "Malformed province id")
    ),
    tag = "regions"
)]
pub async fn city_options(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<CityLookupQuery>,
) -> Result<Json<ApiResponse<Vec<SelectOptionDto>>>> {
    let cities = service
        .list_cities_by_province(query.province_id.unwrap_or_default())
        .await?;
    let options: Vec<SelectOptionDto> = cities.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(options), None, None)))
}
