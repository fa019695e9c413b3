use std::sync::Arc;

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::core::config::ExportConfig;
use crate::core::error::{AppError, Result};
use crate::features::regions::dtos::SelectOptionDto;
use crate::features::regions::services::name_resolution::{
    resolve_city_id, resolve_city_name, resolve_province_id, resolve_province_name,
};
use crate::features::regions::store::ReferenceStore;
use crate::features::suppliers::dtos::{
    CreateSupplierDto, SupplierDetailDto, SupplierIndexDto, SupplierResponseDto,
    UpdateSupplierDto,
};
use crate::features::suppliers::models::{NewSupplier, Supplier, SupplierChanges};
use crate::features::suppliers::query::SupplierQuery;
use crate::features::suppliers::services::export_service::{ExportFile, SupplierExporter};
use crate::features::suppliers::services::search_service::{
    find_suppliers, CodeMatch, SupplierFilter,
};
use crate::features::suppliers::store::SupplierStore;
use crate::shared::validation::{optional_text, require_text};

/// Supplier operations over explicitly injected store handles
pub struct SupplierService {
    suppliers: Arc<dyn SupplierStore>,
    regions: Arc<dyn ReferenceStore>,
    exporter: SupplierExporter,
}

impl SupplierService {
    pub fn new(
        suppliers: Arc<dyn SupplierStore>,
        regions: Arc<dyn ReferenceStore>,
        export: &ExportConfig,
    ) -> Self {
        Self {
            suppliers,
            regions,
            exporter: SupplierExporter::new(export),
        }
    }

    // ==================== Queries ====================

    /// Every supplier plus the province dropdown, nothing selected
    pub async fn supplier_index(&self) -> Result<SupplierIndexDto> {
        let provinces = self.regions.list_provinces().await?;

        let suppliers: Vec<SupplierResponseDto> = self
            .suppliers
            .query(&SupplierQuery::new())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(SupplierIndexDto {
            has_results: !suppliers.is_empty(),
            suppliers,
            province_list: provinces.into_iter().map(SelectOptionDto::from).collect(),
            selected_province_id: None,
        })
    }

    /// Search form: the text filter matches the supplier code only
    pub async fn search_suppliers(&self, filter: &SupplierFilter) -> Result<Vec<Supplier>> {
        find_suppliers(
            self.suppliers.as_ref(),
            self.regions.as_ref(),
            filter,
            CodeMatch::Code,
        )
        .await
    }

    /// List API: the text filter matches the supplier code or name
    pub async fn list_suppliers(&self, filter: &SupplierFilter) -> Result<Vec<Supplier>> {
        find_suppliers(
            self.suppliers.as_ref(),
            self.regions.as_ref(),
            filter,
            CodeMatch::CodeOrName,
        )
        .await
    }

    /// Supplier with its stored province/city names mapped back to ids (0 on miss)
    pub async fn get_by_id(&self, id: i32) -> Result<SupplierDetailDto> {
        let supplier = self
            .suppliers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Supplier with id {} not found", id)))?;

        let province_id =
            resolve_province_id(self.regions.as_ref(), supplier.province.as_deref()).await?;
        let city_id =
            resolve_city_id(self.regions.as_ref(), supplier.city.as_deref(), province_id).await?;

        Ok(SupplierDetailDto::new(supplier, province_id, city_id))
    }

    /// Rows of the search form rendered as a downloadable file
    pub async fn export(&self, filter: &SupplierFilter, now: DateTime<Utc>) -> Result<ExportFile> {
        let rows = self.search_suppliers(filter).await?;
        tracing::info!("Exporting {} suppliers", rows.len());
        self.exporter.export(&rows, now)
    }

    // ==================== Mutations ====================

    /// Create a supplier. Duplicate codes surface as `Conflict` from the store.
    pub async fn create(&self, dto: CreateSupplierDto) -> Result<SupplierResponseDto> {
        let normalized = CreateSupplierDto {
            code: Some(require_text(dto.code.as_deref(), "Supplier Code")?),
            name: Some(require_text(dto.name.as_deref(), "Supplier Name")?),
            province_id: dto.province_id,
            city_id: dto.city_id,
            address: optional_text(dto.address.as_deref()),
            contact_person: optional_text(dto.contact_person.as_deref()),
        };
        normalized
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let province = resolve_province_name(self.regions.as_ref(), normalized.province_id).await?;
        let city = resolve_city_name(self.regions.as_ref(), normalized.city_id).await?;

        let supplier = self
            .suppliers
            .insert(NewSupplier {
                code: normalized.code.unwrap_or_default(),
                name: normalized.name.unwrap_or_default(),
                province,
                city,
                address: normalized.address,
                contact_person: normalized.contact_person,
            })
            .await?;

        tracing::info!("Supplier {} created with id {}", supplier.code, supplier.id);
        Ok(supplier.into())
    }

    /// Replace every field except `code`. Absent province/city ids clear the names.
    pub async fn update(&self, id: i32, dto: UpdateSupplierDto) -> Result<SupplierResponseDto> {
        let normalized = UpdateSupplierDto {
            name: Some(require_text(dto.name.as_deref(), "Supplier Name")?),
            contact_person: Some(require_text(dto.contact_person.as_deref(), "Contact Person")?),
            province_id: dto.province_id,
            city_id: dto.city_id,
            address: optional_text(dto.address.as_deref()),
        };
        normalized
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let existing = self
            .suppliers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Supplier with id {} not found", id)))?;

        let province = resolve_province_name(self.regions.as_ref(), normalized.province_id).await?;
        let city = resolve_city_name(self.regions.as_ref(), normalized.city_id).await?;

        let changes = SupplierChanges {
            name: normalized.name.unwrap_or_default(),
            province,
            city,
            address: normalized.address,
            contact_person: normalized.contact_person,
        };

        let updated = self
            .suppliers
            .update(id, existing.version, changes)
            .await?
            .ok_or_else(|| {
                AppError::Concurrency(format!(
                    "Supplier {} was modified or deleted by another user. Reload and try again.",
                    id
                ))
            })?;

        tracing::info!("Supplier {} updated", id);
        Ok(updated.into())
    }

    /// Delete whichever of `ids` exist. Fails only when none of them do.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64> {
        if ids.is_empty() {
            return Err(AppError::Validation(
                "At least one supplier id is required.".to_string(),
            ));
        }

        let existing: Vec<i32> = self
            .suppliers
            .find_by_ids(ids)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        if existing.is_empty() {
            return Err(AppError::NotFound(
                "None of the selected suppliers were found.".to_string(),
            ));
        }

        let deleted = self.suppliers.delete_many(&existing).await?;
        tracing::info!(
            "Deleted {} of {} requested suppliers",
            deleted,
            ids.len()
        );
        Ok(deleted)
    }
}
