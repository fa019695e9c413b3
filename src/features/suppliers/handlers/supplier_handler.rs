use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::suppliers::dtos::{
    CreateSupplierDto, DeleteSuppliersDto, DeleteSuppliersResponseDto, SupplierDetailDto,
    SupplierIndexDto, SupplierListQuery, SupplierResponseDto, SupplierSearchQuery,
    SupplierSearchResultDto, UpdateSupplierDto,
};
use crate::features::suppliers::services::SupplierService;
use crate::shared::types::{ApiResponse, Meta};

// ==================== Query Handlers ====================

/// Initial data of the supplier screen
#[utoipa::path(
    get,
    path = "/api/supplier/index",
    responses(
        (status = 200, description = "All suppliers and the province dropdown", body = ApiResponse<SupplierIndexDto>)
    ),
    tag = "suppliers"
)]
pub async fn supplier_index(
    State(service): State<Arc<SupplierService>>,
) -> Result<Json<ApiResponse<SupplierIndexDto>>> {
    let index = service.supplier_index().await?;
    Ok(Json(ApiResponse::success(Some(index), None, None)))
}

/// Search suppliers from the filter form (code match only)
#[utoipa::path(
    get,
    path = "/api/supplier/search",
    params(SupplierSearchQuery),
    responses(
        (status = 200, description = "Matching suppliers", body = ApiResponse<SupplierSearchResultDto>),
        (status = 400, description = "Malformed filter")
    ),
    tag = "suppliers"
)]
pub async fn search_suppliers(
    State(service): State<Arc<SupplierService>>,
    AppQuery(query): AppQuery<SupplierSearchQuery>,
) -> Result<Json<ApiResponse<SupplierSearchResultDto>>> {
    let suppliers = service.search_suppliers(&query.into()).await?;
    let meta = Meta::total_of(&suppliers);
    Ok(Json(ApiResponse::success(
        Some(SupplierSearchResultDto::new(suppliers)),
        None,
        Some(meta),
    )))
}

/// List suppliers (code or name match)
#[utoipa::path(
    get,
    path = "/api/supplier",
    params(SupplierListQuery),
    responses(
        (status = 200, description = "Matching suppliers", body = ApiResponse<Vec<SupplierResponseDto>>),
        (status = 400, description = "Malformed filter")
    ),
    tag = "suppliers"
)]
pub async fn list_suppliers(
    State(service): State<Arc<SupplierService>>,
    AppQuery(query): AppQuery<SupplierListQuery>,
) -> Result<Json<ApiResponse<Vec<SupplierResponseDto>>>> {
    let suppliers = service.list_suppliers(&query.into()).await?;
    let dtos: Vec<SupplierResponseDto> = suppliers.into_iter().map(Into::into).collect();
    let meta = Meta::total_of(&dtos);
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

/// Get a supplier by ID with resolved province/city ids
#[utoipa::path(
    get,
    path = "/api/supplier/{id}",
    params(
        ("id" = i32, Path, description = "Supplier ID")
    ),
    responses(
        (status = 200, description = "Supplier details", body = ApiResponse<SupplierDetailDto>),
        (status = 404, description = "Supplier not found")
    ),
    tag = "suppliers"
)]
pub async fn get_supplier(
    State(service): State<Arc<SupplierService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<SupplierDetailDto>>> {
    let supplier = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(supplier), None, None)))
}

/// Download the filtered supplier list as a spreadsheet (CSV)
#[utoipa::path(
    get,
    path = "/api/supplier/export",
    params(SupplierSearchQuery),
    responses(
        (status = 200, description = "CSV file", content_type = "text/csv"),
        (status = 400, description = "Malformed filter")
    ),
    tag = "suppliers"
)]
pub async fn export_suppliers(
    State(service): State<Arc<SupplierService>>,
    AppQuery(query): AppQuery<SupplierSearchQuery>,
) -> Result<Response> {
    let file = service.export(&query.into(), Utc::now()).await?;
    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.bytes,
    )
        .into_response())
}

// ==================== Mutation Handlers ====================

/// Create a supplier
#[utoipa::path(
    post,
    path = "/api/supplier",
    request_body = CreateSupplierDto,
    responses(
        (status = 201, description = "Supplier created", body = ApiResponse<SupplierResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Supplier code already exists")
    ),
    tag = "suppliers"
)]
pub async fn create_supplier(
    State(service): State<Arc<SupplierService>>,
    AppJson(dto): AppJson<CreateSupplierDto>,
) -> Result<(StatusCode, Json<ApiResponse<SupplierResponseDto>>)> {
    let supplier = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(supplier), None, None)),
    ))
}

/// Update a supplier (code is immutable)
#[utoipa::path(
    put,
    path = "/api/supplier/{id}",
    params(
        ("id" = i32, Path, description = "Supplier ID")
    ),
    request_body = UpdateSupplierDto,
    responses(
        (status = 200, description = "Supplier updated", body = ApiResponse<SupplierResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Supplier not found"),
        (status = 409, description = "Supplier was modified concurrently")
    ),
    tag = "suppliers"
)]
pub async fn update_supplier(
    State(service): State<Arc<SupplierService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateSupplierDto>,
) -> Result<Json<ApiResponse<SupplierResponseDto>>> {
    let supplier = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(supplier),
        Some("Supplier updated successfully".to_string()),
        None,
    )))
}

/// Delete several suppliers at once
#[utoipa::path(
    post,
    path = "/api/supplier/delete",
    request_body = DeleteSuppliersDto,
    responses(
        (status = 200, description = "Suppliers deleted", body = ApiResponse<DeleteSuppliersResponseDto>),
        (status = 400, description = "No ids supplied"),
        (status = 404, description = "None of the ids exist")
    ),
    tag = "suppliers"
)]
pub async fn delete_suppliers(
    State(service): State<Arc<SupplierService>>,
    AppJson(dto): AppJson<DeleteSuppliersDto>,
) -> Result<Json<ApiResponse<DeleteSuppliersResponseDto>>> {
    let deleted_count = service.delete_many(&dto.ids).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteSuppliersResponseDto { deleted_count }),
        Some(format!("{} supplier(s) deleted", deleted_count)),
        None,
    )))
}
