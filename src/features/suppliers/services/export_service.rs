use chrono::{DateTime, Utc};

use crate::core::config::ExportConfig;
use crate::core::error::{AppError, Result};
use crate::features::suppliers::models::Supplier;
use crate::shared::constants::{CSV_CONTENT_TYPE, SUPPLIER_EXPORT_COLUMNS};

/// Lets spreadsheet applications detect UTF-8
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A rendered download
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Serializes supplier rows into a spreadsheet-compatible CSV file
#[derive(Debug, Clone)]
pub struct SupplierExporter {
    file_prefix: String,
}

impl SupplierExporter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            file_prefix: config.file_prefix.clone(),
        }
    }

    pub fn export(&self, rows: &[Supplier], now: DateTime<Utc>) -> Result<ExportFile> {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend(write_csv(rows)?);

        Ok(ExportFile {
            file_name: self.file_name(now),
            content_type: CSV_CONTENT_TYPE,
            bytes,
        })
    }

    fn file_name(&self, now: DateTime<Utc>) -> String {
        format!("{}_{}.csv", self.file_prefix, now.format("%Y%m%d_%H%M%S"))
    }
}

/// Header row followed by one row per supplier; missing values become empty cells
pub fn write_csv(rows: &[Supplier]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(SUPPLIER_EXPORT_COLUMNS)
        .map_err(|e| AppError::Internal(format!("Failed to write export header: {}", e)))?;

    for supplier in rows {
        writer
            .write_record([
                supplier.code.as_str(),
                supplier.name.as_str(),
                supplier.address.as_deref().unwrap_or_default(),
                supplier.province.as_deref().unwrap_or_default(),
                supplier.city.as_deref().unwrap_or_default(),
                supplier.contact_person.as_deref().unwrap_or_default(),
            ])
            .map_err(|e| {
                AppError::Internal(format!("Failed to write supplier {}: {}", supplier.id, e))
            })?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Failed to finish export: {}", e)))
}
