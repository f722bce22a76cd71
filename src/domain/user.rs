//! User record entity and the rules a record must satisfy before it is stored.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::config::MISSING_FIELDS_MESSAGE;
use crate::errors::{AppError, AppResult};

/// `<non-space>+@<non-space>+.<non-space>+`
pub static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Identifier assigned by the store
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Normalized (trimmed, lower-cased) email
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "+44 20 7946 0000")]
    pub phone: String,
    /// Creation timestamp; `null` for records stored without one
    pub created_at: Option<DateTime<Utc>>,
}

/// Create request body
///
/// Fields are optional at the type level so that a missing field is
/// reported with the same message as an empty one. Numbers and booleans
/// are accepted as their text form.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(
        required(message = "Please provide all required fields"),
        custom(function = "not_blank", message = "Please provide all required fields")
    )]
    #[schema(example = "Ada Lovelace")]
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[validate(
        required(message = "Please provide all required fields"),
        custom(function = "not_blank", message = "Please provide all required fields")
    )]
    #[schema(example = "Ada@Example.com")]
    #[serde(default, deserialize_with = "scalar_text")]
    pub email: Option<String>,
    #[validate(
        required(message = "Please provide all required fields"),
        custom(function = "not_blank", message = "Please provide all required fields")
    )]
    #[schema(example = "+44 20 7946 0000")]
    #[serde(default, deserialize_with = "scalar_text")]
    pub phone: Option<String>,
}

impl CreateUser {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            phone: Some(phone.to_string()),
        }
    }
}

/// JSON scalar read as text; `null` stays absent
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
        Bool(bool),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|value| match value {
        Scalar::Text(text) => text,
        Scalar::Number(number) => number.to_string(),
        Scalar::Bool(flag) => flag.to_string(),
    }))
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Normalized record that passed the schema rules and may be inserted.
///
/// Only constructible through [`NewUserRecord::new`] or `TryFrom<CreateUser>`,
/// so holding one means the candidate is already trimmed, lower-cased and
/// validated.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewUserRecord {
    #[validate(length(min = 1, message = "Name is required"))]
    name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        regex(path = *EMAIL_PATTERN, message = "Please enter a valid email")
    )]
    email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    phone: String,
    created_at: Option<DateTime<Utc>>,
}

impl NewUserRecord {
    /// Normalize and validate a candidate record.
    ///
    /// # Errors
    /// `AppError::Validation` when a field is blank or the email is malformed.
    pub fn new(name: &str, email: &str, phone: &str) -> AppResult<Self> {
        let candidate = Self {
            name: name.trim().to_string(),
            email: normalize_email(email),
            phone: phone.trim().to_string(),
            created_at: None,
        };

        if candidate.name.is_empty() || candidate.email.is_empty() || candidate.phone.is_empty() {
            return Err(AppError::validation(MISSING_FIELDS_MESSAGE));
        }

        candidate
            .validate()
            .map_err(|e| AppError::validation(first_message(&e)))?;

        Ok(candidate)
    }

    /// Keep an explicit creation time instead of the store's default.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn requested_created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl TryFrom<CreateUser> for NewUserRecord {
    type Error = AppError;

    fn try_from(input: CreateUser) -> AppResult<Self> {
        match (input.name, input.email, input.phone) {
            (Some(name), Some(email), Some(phone)) => Self::new(&name, &email, &phone),
            _ => Err(AppError::validation(MISSING_FIELDS_MESSAGE)),
        }
    }
}

/// Uniqueness key for a user record.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Validation failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::INVALID_EMAIL_MESSAGE;

    #[test]
    fn new_record_is_trimmed_and_lowercased() {
        let record = NewUserRecord::new("  Ada ", " Ada@Example.com ", " 123 ").unwrap();

        assert_eq!(record.name(), "Ada");
        assert_eq!(record.email(), "ada@example.com");
        assert_eq!(record.phone(), "123");
        assert!(record.requested_created_at().is_none());
    }

    #[test]
    fn blank_fields_are_missing_fields() {
        for (name, email, phone) in [
            ("", "a@b.co", "1"),
            ("Ada", "   ", "1"),
            ("Ada", "a@b.co", "\t"),
        ] {
            let err = NewUserRecord::new(name, email, phone).unwrap_err();
            assert_eq!(err.user_message(), MISSING_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ada", "ada@example", "ada @example.com", "@example.com"] {
            let err = NewUserRecord::new("Ada", email, "123").unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{email}");
            assert_eq!(err.user_message(), INVALID_EMAIL_MESSAGE);
        }
    }

    #[test]
    fn email_pattern_accepts_plain_addresses() {
        assert!(EMAIL_PATTERN.is_match("ada@example.com"));
        assert!(EMAIL_PATTERN.is_match("a.b+c@mail.example.co.uk"));
        assert!(!EMAIL_PATTERN.is_match("ada@example."));
    }

    #[test]
    fn create_request_requires_every_field() {
        let missing_phone = CreateUser {
            phone: None,
            ..CreateUser::new("Ada", "ada@example.com", "")
        };
        let errors = missing_phone.validate().unwrap_err();
        assert_eq!(first_message(&errors), MISSING_FIELDS_MESSAGE);

        let blank_name = CreateUser::new(" ", "ada@example.com", "123");
        let errors = blank_name.validate().unwrap_err();
        assert_eq!(first_message(&errors), MISSING_FIELDS_MESSAGE);

        assert!(CreateUser::new("Ada", "ada@example.com", "123").validate().is_ok());
    }

    #[test]
    fn conversion_from_request_normalizes() {
        let record = NewUserRecord::try_from(CreateUser::new("Ada", "ADA@EXAMPLE.COM", "123")).unwrap();
        assert_eq!(record.email(), "ada@example.com");

        let err = NewUserRecord::try_from(CreateUser::default()).unwrap_err();
        assert_eq!(err.user_message(), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn create_request_reads_scalars_as_text() {
        let input: CreateUser = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "phone": 5550100,
        }))
        .unwrap();
        assert_eq!(input.phone.as_deref(), Some("5550100"));

        let input: CreateUser =
            serde_json::from_value(serde_json::json!({ "name": "Ada", "phone": null })).unwrap();
        assert!(input.email.is_none());
        assert!(input.phone.is_none());

        let nested = serde_json::from_value::<CreateUser>(serde_json::json!({ "phone": ["1"] }));
        assert!(nested.is_err());
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = UserRecord {
            id: Uuid::nil(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "123".to_string(),
            created_at: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json["createdAt"].is_null());
        assert_eq!(json["email"], "ada@example.com");
    }
}
