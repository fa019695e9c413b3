mod supplier_dto;

pub use supplier_dto::*;
