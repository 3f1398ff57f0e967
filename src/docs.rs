//! OpenAPI documentation
//!
//! The OpenAPI 3.0 document is aggregated from the `#[utoipa::path]`
//! annotations adjacent to each handler and the `ToSchema` derives on the
//! request/response types. Swagger UI renders it at `/api-docs`; the raw
//! document is served at `/api-docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ErrorResponse;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};

/// OpenAPI document for the user CRUD surface
#[derive(OpenApi)]
#[openapi(
    info(
        title = "user-service",
        description = "CRUD API for user records"
    ),
    paths(
        crate::handlers::users::list_users,
        crate::handlers::users::get_user,
        crate::handlers::users::create_user,
        crate::handlers::users::update_user,
        crate::handlers::users::delete_user,
    ),
    components(schemas(User, CreateUserRequest, UpdateUserRequest, ErrorResponse)),
    tags(
        (name = "users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Router serving Swagger UI and the OpenAPI document
pub fn swagger_router() -> Router {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
