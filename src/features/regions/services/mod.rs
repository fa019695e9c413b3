pub mod name_resolution;
mod region_service;

pub use region_service::RegionService;
