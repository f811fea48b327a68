use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CreateCommentDto, CommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        model::comment::{CreateCommentParams, UpdateCommentParams},
        service::comment::CommentService,
        state::AppState,
        util::{
            extract::{ValidJson, ValidPath},
            validate,
        },
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comments";

/// Create a new comment.
#[utoipa::path(
    post,
    path = "/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.data);

    let comment = service.create(CreateCommentParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// List all comments.
#[utoipa::path(
    get,
    path = "/comments",
    tag = COMMENT_TAG,
    responses(
        (status = 200, description = "All comments", body = Vec<CommentDto>),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn get_all_comments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.data);

    let comments: Vec<CommentDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|comment| comment.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(comments)))
}

/// Get a comment by ID.
#[utoipa::path(
    get,
    path = "/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment found", body = CommentDto),
        (status = 400, description = "Invalid comment ID", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    validate::id("id", id)?;

    let service = CommentService::new(&state.data);
    let comment = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Edit the body of a comment.
#[utoipa::path(
    patch,
    path = "/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = CommentDto),
        (status = 400, description = "Invalid comment ID or update data", body = ErrorDto),
        (status = 404, description = "Comment not found to update", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    validate::id("id", id)?;

    let service = CommentService::new(&state.data);
    let comment = service.update(UpdateCommentParams::from_dto(id, payload)).await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment.
#[utoipa::path(
    delete,
    path = "/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted comment", body = CommentDto),
        (status = 400, description = "Invalid comment ID", body = ErrorDto),
        (status = 404, description = "Comment not found to delete", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    validate::id("id", id)?;

    let service = CommentService::new(&state.data);
    let comment = service.delete(id).await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}
