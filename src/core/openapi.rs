use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::features::suppliers::{dtos as suppliers_dtos, handlers as suppliers_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_provinces,
        regions_handlers::list_cities_by_province,
        regions_handlers::city_options,
        // Suppliers
        suppliers_handlers::supplier_index,
        suppliers_handlers::search_suppliers,
        suppliers_handlers::list_suppliers,
        suppliers_handlers::get_supplier,
        suppliers_handlers::export_suppliers,
        suppliers_handlers::create_supplier,
        suppliers_handlers::update_supplier,
        suppliers_handlers::delete_suppliers,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Regions
            regions_dtos::ProvinceResponseDto,
            regions_dtos::CityResponseDto,
            regions_dtos::SelectOptionDto,
            ApiResponse<Vec<regions_dtos::ProvinceResponseDto>>,
            ApiResponse<Vec<regions_dtos::CityResponseDto>>,
            ApiResponse<Vec<regions_dtos::SelectOptionDto>>,
            // Suppliers
            suppliers_dtos::CreateSupplierDto,
            suppliers_dtos::UpdateSupplierDto,
            suppliers_dtos::DeleteSuppliersDto,
            suppliers_dtos::SupplierResponseDto,
            suppliers_dtos::SupplierDetailDto,
            suppliers_dtos::SupplierSearchResultDto,
            suppliers_dtos::SupplierIndexDto,
            suppliers_dtos::DeleteSuppliersResponseDto,
            ApiResponse<suppliers_dtos::SupplierIndexDto>,
            ApiResponse<suppliers_dtos::SupplierSearchResultDto>,
            ApiResponse<Vec<suppliers_dtos::SupplierResponseDto>>,
            ApiResponse<suppliers_dtos::SupplierResponseDto>,
            ApiResponse<suppliers_dtos::SupplierDetailDto>,
            ApiResponse<suppliers_dtos::DeleteSuppliersResponseDto>,
        )
    ),
    tags(
        (name = "regions", description = "Province and city reference data"),
        (name = "suppliers", description = "Supplier master data: search, maintenance and export"),
    ),
    info(
        title = "Supplier Registry API",
        version = "0.1.0",
        description = "API documentation for the supplier registry",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
