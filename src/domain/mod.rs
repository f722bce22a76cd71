//! Domain layer - Core business entities and logic
//!
//! Contains the user record, the create request, and the schema rules a
//! candidate record must satisfy before it reaches the store.

pub mod user;

pub use user::{normalize_email, CreateUser, NewUserRecord, UserRecord, EMAIL_PATTERN};
