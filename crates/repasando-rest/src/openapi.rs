//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use crate::responses::ErrorBody;
use repasando_core::{PageInfo, User, UserId};
use repasando_service::UserRequest;
use utoipa::OpenApi;

/// OpenAPI documentation for the Repasando API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Repasando API",
        version = "1.0.0",
        description = "CRUD API for user records",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::list_users_page,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            UserId,
            User,
            UserRequest,
            PageInfo,
            ErrorBody,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_user_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/users"));
        assert!(paths.contains_key("/api/users/page/{page}"));
        assert!(paths.contains_key("/api/users/{id}"));
        assert!(paths.contains_key("/health"));
    }
}
