//! User Directory - a small REST service for user records
//!
//! Operators submit name/email/phone records, list them, and export the
//! list as an `.xlsx` spreadsheet.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User record entity and its validation rules
//! - **services**: Directory use cases and spreadsheet export
//! - **infra**: Database pool, migrations and the record repository
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Response envelopes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CreateUser, UserRecord};
pub use errors::{AppError, AppResult};
pub use infra::Database;
