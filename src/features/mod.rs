pub mod regions;
pub mod suppliers;
