//! Point ledger endpoints.

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::points_router;
