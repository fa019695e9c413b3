//! Supplier master data.
//!
//! Suppliers store province and city as display-name snapshots taken at write
//! time. Filters arrive as reference ids and are translated to names before the
//! query runs; detail reads translate the stored names back to ids.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/supplier/index` | All suppliers plus the province dropdown |
//! | GET | `/api/supplier/search` | Search form (code, province, city) |
//! | GET | `/api/supplier` | List API (code or name, ids or exact names) |
//! | POST | `/api/supplier` | Create a supplier |
//! | GET | `/api/supplier/{id}` | Supplier detail with resolved ids |
//! | PUT | `/api/supplier/{id}` | Update a supplier (code is immutable) |
//! | POST | `/api/supplier/delete` | Delete several suppliers |
//! | GET | `/api/supplier/export` | Download the filtered list as CSV |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod query;
pub mod routes;
pub mod services;
pub mod store;

pub use services::SupplierService;
pub use store::PgSupplierStore;
