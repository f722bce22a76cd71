//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{export_handler, user_handler};
use crate::domain::{CreateUser, UserRecord};

/// OpenAPI documentation for the user directory
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory",
        version = "0.1.0",
        description = "Submit, list and export name/email/phone records",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::create_user,
        export_handler::export_users,
    ),
    components(
        schemas(
            UserRecord,
            CreateUser,
        )
    ),
    tags(
        (name = "Users", description = "User record operations"),
        (name = "Export", description = "Spreadsheet export")
    )
)]
pub struct ApiDoc;
