//! Province and city reference data.
//!
//! Provinces own cities (1:N). The data is seeded externally and only read here:
//! to populate cascading dropdowns and to translate ids into the display names
//! that suppliers store.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/provinces` | List all provinces |
//! | GET | `/api/provinces/{id}/cities` | List cities in a province |
//! | GET | `/api/supplier/cities?provinceId=` | City dropdown options |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::RegionService;
pub use store::PgReferenceStore;
