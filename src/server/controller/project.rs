use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        project::{CreateProjectDto, ProjectDto, UpdateProjectDto},
    },
    server::{
        error::AppError,
        model::project::{CreateProjectParams, UpdateProjectParams},
        service::project::ProjectService,
        state::AppState,
        util::{
            extract::{ValidJson, ValidPath},
            validate,
        },
    },
};

/// Tag for grouping project endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "projects";

/// Create a new project.
///
/// # Returns
/// - `201 Created` - The created project
/// - `400 Bad Request` - Invalid project data
/// - `502 Bad Gateway` / `504 Gateway Timeout` - Data service failure
#[utoipa::path(
    post,
    path = "/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Successfully created project", body = ProjectDto),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.data);

    let project = service.create(CreateProjectParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(project.into_dto())))
}

/// List all projects.
#[utoipa::path(
    get,
    path = "/projects",
    tag = PROJECT_TAG,
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectDto>),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn get_all_projects(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.data);

    let projects: Vec<ProjectDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|project| project.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(projects)))
}

/// Get a project by ID.
///
/// # Returns
/// - `200 OK` - The project
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No project has that ID
/// - `502 Bad Gateway` / `504 Gateway Timeout` - Data service failure
#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = ProjectDto),
        (status = 400, description = "Invalid project ID", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    validate::id("id", id)?;

    let service = ProjectService::new(&state.data);
    let project = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Update a project.
///
/// Fields omitted from the body are left unchanged.
///
/// # Returns
/// - `200 OK` - The updated project
/// - `400 Bad Request` - Invalid ID or update data
/// - `404 Not Found` - No project has that ID
/// - `502 Bad Gateway` / `504 Gateway Timeout` - Data service failure
#[utoipa::path(
    patch,
    path = "/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Successfully updated project", body = ProjectDto),
        (status = 400, description = "Invalid project ID or update data", body = ErrorDto),
        (status = 404, description = "Project not found to update", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    validate::id("id", id)?;

    let service = ProjectService::new(&state.data);
    let project = service.update(UpdateProjectParams::from_dto(id, payload)).await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Delete a project.
///
/// # Returns
/// - `200 OK` - The deleted project
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No project has that ID
/// - `502 Bad Gateway` / `504 Gateway Timeout` - Data service failure
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted project", body = ProjectDto),
        (status = 400, description = "Invalid project ID", body = ErrorDto),
        (status = 404, description = "Project not found to delete", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    validate::id("id", id)?;

    let service = ProjectService::new(&state.data);
    let project = service.delete(id).await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}
