//! OpenAPI documentation configuration.

use crate::controllers::{HealthResponse, HealthStatus};
use crate::responses::ApiErrorResponse;
use roster_core::ErrorResponse;
use roster_service::UserResponse;
use utoipa::OpenApi;

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Path of the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// OpenAPI documentation for the Roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "1.0.0",
        description = "Read-only user directory",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::user_controller::list_users,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            UserResponse,
            HealthResponse,
            HealthStatus,
            ErrorResponse,
            ApiErrorResponse,
        )
    ),
    tags(
        (name = "users", description = "User directory endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
