//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Environment variable holding the database connection string
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Default maximum pool size
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Default minimum pool size
pub const DEFAULT_DATABASE_MIN_CONNECTIONS: u32 = 1;

// =============================================================================
// Response Messages
// =============================================================================

/// Create request is missing one of name, email or phone
pub const MISSING_FIELDS_MESSAGE: &str = "Please provide all required fields";

/// Email does not match the record pattern
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email";

/// Request body could not be parsed as JSON
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// A record with the normalized email already exists
pub const DUPLICATE_EMAIL_MESSAGE: &str = "User with this email already exists";

pub const FETCH_USERS_FAILED: &str = "Failed to fetch users";

pub const CREATE_USER_FAILED: &str = "Failed to create user";

pub const EXPORT_USERS_FAILED: &str = "Failed to export users";

// =============================================================================
// Spreadsheet Export
// =============================================================================

/// MIME type of the exported workbook
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Content-Disposition of the exported workbook
pub const EXPORT_CONTENT_DISPOSITION: &str = "attachment; filename=users.xlsx";

/// Worksheet name inside the exported workbook
pub const EXPORT_SHEET_NAME: &str = "Users";

/// Column headers and widths, in column order
pub const EXPORT_COLUMNS: [(&str, f64); 4] = [
    ("Name", 30.0),
    ("Email", 30.0),
    ("Phone", 20.0),
    ("Date Added", 20.0),
];

/// Rendering of `createdAt` in the "Date Added" column (UTC)
pub const EXPORT_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Placeholder for records without a creation timestamp
pub const EXPORT_MISSING_DATE: &str = "N/A";
