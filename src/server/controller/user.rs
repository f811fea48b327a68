use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
        util::{
            extract::{ValidJson, ValidPath},
            validate,
        },
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Create a new user.
///
/// # Arguments
/// - `state` - Application state containing the data service client
/// - `payload` - Name, email and optional avatar URL and project of the new user
///
/// # Returns
/// - `201 Created` - The created user, including its backend-assigned id
/// - `400 Bad Request` - Invalid user data
/// - `502 Bad Gateway` - Data service unavailable or failed
/// - `504 Gateway Timeout` - Data service did not answer in time
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.data);

    let user = service.create(CreateUserParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List all users.
///
/// An empty list is returned as-is; there is no not-found outcome for collections.
///
/// # Returns
/// - `200 OK` - Every user
/// - `502 Bad Gateway` - Data service unavailable or failed
/// - `504 Gateway Timeout` - Data service did not answer in time
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.data);

    let users: Vec<UserDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|user| user.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Get a user by email.
///
/// # Arguments
/// - `state` - Application state containing the data service client
/// - `email` - Email identifying the user
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - Malformed email
/// - `404 Not Found` - No user has that email
/// - `502 Bad Gateway` - Data service unavailable or failed
/// - `504 Gateway Timeout` - Data service did not answer in time
#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "Email of the user")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 400, description = "Invalid email format", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    ValidPath(email): ValidPath<String>,
) -> Result<impl IntoResponse, AppError> {
    validate::email("email", &email)?;

    let service = UserService::new(&state.data);
    let user = service.get_by_email(&email).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user.
///
/// Applies a partial update; fields omitted from the body are left unchanged.
///
/// # Arguments
/// - `state` - Application state containing the data service client
/// - `email` - Email identifying the user
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Malformed email or invalid update data
/// - `404 Not Found` - No user has that email
/// - `502 Bad Gateway` - Data service unavailable or failed
/// - `504 Gateway Timeout` - Data service did not answer in time
#[utoipa::path(
    patch,
    path = "/users/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "Email of the user")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid email format or update data", body = ErrorDto),
        (status = 404, description = "User not found to update", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    ValidPath(email): ValidPath<String>,
    ValidJson(payload): ValidJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    validate::email("email", &email)?;

    let service = UserService::new(&state.data);
    let user = service
        .update(UpdateUserParams::from_dto(email, payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user.
///
/// # Arguments
/// - `state` - Application state containing the data service client
/// - `email` - Email identifying the user
///
/// # Returns
/// - `200 OK` - The deleted user
/// - `400 Bad Request` - Malformed email
/// - `404 Not Found` - No user has that email
/// - `502 Bad Gateway` - Data service unavailable or failed
/// - `504 Gateway Timeout` - Data service did not answer in time
#[utoipa::path(
    delete,
    path = "/users/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "Email of the user")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = UserDto),
        (status = 400, description = "Invalid email format", body = ErrorDto),
        (status = 404, description = "User not found to delete", body = ErrorDto),
        (status = 502, description = "Data service unavailable", body = ErrorDto),
        (status = 504, description = "Data service timed out", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ValidPath(email): ValidPath<String>,
) -> Result<impl IntoResponse, AppError> {
    validate::email("email", &email)?;

    let service = UserService::new(&state.data);
    let user = service.delete(&email).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
