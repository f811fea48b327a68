use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        issue::{CreateIssueDto, IssueDto, UpdateIssueDto},
    },
    server::{
        error::AppError,
        model::issue::{CreateIssueParams, UpdateIssueParams},
        service::issue::IssueService,
        state::AppState,
        util::{
            extract::{ValidJson, ValidPath},
            validate,
        },
    },
};

/// Tag for grouping issue endpoints in OpenAPI documentation
pub static ISSUE_TAG: &str = "issues";

/// Open a new issue.
///
/// `priority` may be given as a level name or as the legacy numeric string.
///
/// # Returns
/// - `201 Created` - The created issue
/// - `400 Bad Request` - Invalid issue data
/// - `502 Bad Gateway` / `504 Gateway Timeout` - Data service failure
#[utoipa::path(
    post,
    path = "/issues",
    tag = ISSUE_TAG,
    request_body = CreateIssueDto,
    responses(
        (status = 201, description = "Successfully created issue", body = IssueDto),
        (status = 400, description = "Invalid issue data", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn create_issue(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateIssueDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = IssueService::new(&state.data);

    let issue = service.create(CreateIssueParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(issue.into_dto())))
}

/// List all issues.
#[utoipa::path(
    get,
    path = "/issues",
    tag = ISSUE_TAG,
    responses(
        (status = 200, description = "All issues", body = Vec<IssueDto>),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn get_all_issues(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = IssueService::new(&state.data);

    let issues: Vec<IssueDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|issue| issue.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(issues)))
}

/// Get an issue by ID.
///
/// # Returns
/// - `200 OK` - The issue
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No issue has that ID
/// - `502 Bad Gateway` / `504 Gateway Timeout` - Data service failure
#[utoipa::path(
    get,
    path = "/issues/{id}",
    tag = ISSUE_TAG,
    params(
        ("id" = i32, Path, description = "Issue ID")
    ),
    responses(
        (status = 200, description = "Issue found", body = IssueDto),
        (status = 400, description = "Invalid issue ID", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn get_issue(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    validate::id("id", id)?;

    let service = IssueService::new(&state.data);
    let issue = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(issue.into_dto())))
}

/// List the issues of one project.
///
/// Unlike `GET /issues`, this collection has a not-found outcome: the data service
/// reports a missing project separately from a project with no issues.
///
/// # Arguments
/// - `state` - Application state containing the data service client
/// - `project_id` - ID of the project
///
/// # Returns
/// - `200 OK` - The project's issues, possibly none
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - The project does not exist
/// - `502 Bad Gateway` / `504 Gateway Timeout` - Data service failure
#[utoipa::path(
    get,
    path = "/issues/project/{project_id}",
    tag = ISSUE_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Issues of the project", body = Vec<IssueDto>),
        (status = 400, description = "Invalid project ID", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn get_project_issues(
    State(state): State<AppState>,
    ValidPath(project_id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    validate::id("projectId", project_id)?;

    let service = IssueService::new(&state.data);

    let issues: Vec<IssueDto> = service
        .get_by_project(project_id)
        .await?
        .into_iter()
        .map(|issue| issue.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(issues)))
}

/// Update an issue.
///
/// Fields omitted from the body are left unchanged.
///
/// # Returns
/// - `200 OK` - The updated issue
/// - `400 Bad Request` - Invalid ID or update data
/// - `404 Not Found` - No issue has that ID
/// - `502 Bad Gateway` / `504 Gateway Timeout` - Data service failure
#[utoipa::path(
    patch,
    path = "/issues/{id}",
    tag = ISSUE_TAG,
    params(
        ("id" = i32, Path, description = "Issue ID")
    ),
    request_body = UpdateIssueDto,
    responses(
        (status = 200, description = "Successfully updated issue", body = IssueDto),
        (status = 400, description = "Invalid issue ID or update data", body = ErrorDto),
        (status = 404, description = "Issue not found to update", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn update_issue(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<UpdateIssueDto>,
) -> Result<impl IntoResponse, AppError> {
    validate::id("id", id)?;

    let service = IssueService::new(&state.data);
    let issue = service.update(UpdateIssueParams::from_dto(id, payload)).await?;

    Ok((StatusCode::OK, Json(issue.into_dto())))
}

/// Delete an issue.
///
/// # Returns
/// - `200 OK` - The deleted issue
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No issue has that ID
/// - `502 Bad Gateway` / `504 Gateway Timeout` - Data service failure
#[utoipa::path(
    delete,
    path = "/issues/{id}",
    tag = ISSUE_TAG,
    params(
        ("id" = i32, Path, description = "Issue ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted issue", body = IssueDto),
        (status = 400, description = "Invalid issue ID", body = ErrorDto),
        (status = 404, description = "Issue not found to delete", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn delete_issue(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    validate::id("id", id)?;

    let service = IssueService::new(&state.data);
    let issue = service.delete(id).await?;

    Ok((StatusCode::OK, Json(issue.into_dto())))
}
