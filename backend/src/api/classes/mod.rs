//! Class endpoints: creation, listing, detail, enrollment and leaderboard.

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::classes_router;
