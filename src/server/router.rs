use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{auth::*, comment::*, issue::*, project::*, user::*},
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Path the Swagger UI is served under.
pub const DOCS_PATH: &str = "/api";
/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Gira", description = "The Gira CRUD API", version = "0.1"),
    tags(
        (name = "users", description = "Users, addressed by email"),
        (name = "projects", description = "Projects"),
        (name = "issues", description = "Issues and their reporters"),
        (name = "comments", description = "Comments on issues"),
        (name = "auth", description = "Signup and login")
    )
)]
pub struct ApiDoc;

/// Every API route together with its OpenAPI description.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(create_user, get_all_users))
        .routes(routes!(get_user, update_user, delete_user))
        .routes(routes!(create_project, get_all_projects))
        .routes(routes!(get_project, update_project, delete_project))
        .routes(routes!(create_issue, get_all_issues))
        .routes(routes!(get_issue, update_issue, delete_issue))
        .routes(routes!(get_project_issues))
        .routes(routes!(create_comment, get_all_comments))
        .routes(routes!(get_comment, update_comment, delete_comment))
        .routes(routes!(sign_up))
        .routes(routes!(log_in))
}

/// Builds the complete application: API routes, documentation and middleware.
///
/// # Arguments
/// - `state` - Shared application state
/// - `config` - Application configuration, read for the CORS origin
///
/// # Returns
/// - `Ok(Router)` - Router ready to be served
/// - `Err(AppError::ConfigErr)` - The configured CORS origin is not a valid header value
pub fn app(state: AppState, config: &Config) -> Result<Router, AppError> {
    let (api_router, api) = router().split_for_parts();

    let mut app = api_router
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, api))
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = &config.cors_allowed_origin {
        app = app.layer(cors_layer(origin)?);
    }

    Ok(app.with_state(state))
}

fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
        name: "CORS_ALLOWED_ORIGIN".to_string(),
        value: origin.to_string(),
        reason: e.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
