//! Infrastructure layer - External systems integration
//!
//! - Database connection pool and migrations
//! - User record repository

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(test)]
pub use repositories::MockUserRepository;
