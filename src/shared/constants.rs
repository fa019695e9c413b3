/// Maximum length of a supplier code
pub const SUPPLIER_CODE_MAX_LEN: u64 = 50;

/// Maximum length of a supplier name
pub const SUPPLIER_NAME_MAX_LEN: u64 = 100;

/// Maximum length of a supplier address
pub const SUPPLIER_ADDRESS_MAX_LEN: u64 = 250;

/// Maximum length of a supplier contact person (PIC)
pub const SUPPLIER_CONTACT_MAX_LEN: u64 = 100;

// =============================================================================
// EXPORT
// =============================================================================

/// Column headers of the supplier export, in output order
pub const SUPPLIER_EXPORT_COLUMNS: [&str; 6] =
    ["Code", "Name", "Address", "Province", "City", "ContactPerson"];

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
