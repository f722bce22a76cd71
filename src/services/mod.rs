//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain rules and the record store to fulfill
//! the directory's use cases. They depend on the repository trait, not on
//! a concrete database.

mod directory_service;
pub mod export;

pub use directory_service::{DirectoryService, UserDirectory};
