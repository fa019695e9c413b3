pub mod export_service;
pub mod search_service;
mod supplier_service;

pub use search_service::SupplierFilter;
pub use supplier_service::SupplierService;
