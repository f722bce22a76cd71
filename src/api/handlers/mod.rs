//! HTTP request handlers.

pub mod export_handler;
pub mod user_handler;

pub use export_handler::export_routes;
pub use user_handler::user_routes;
