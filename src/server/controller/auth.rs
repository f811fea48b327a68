use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginRequestDto, SignUpDto, SignUpRequestDto},
    },
    server::{
        error::AppError,
        model::auth::{LoginParams, SignUpParams},
        service::auth::AuthService,
        state::AppState,
        util::extract::ValidJson,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register credentials for an email.
///
/// The password is hashed by the gateway; only the digest is sent to the authentication
/// service.
///
/// # Arguments
/// - `state` - Application state containing the auth client and verifier
/// - `payload` - Email and plaintext password
///
/// # Returns
/// - `201 Created` - Credentials stored
/// - `400 Bad Request` - Invalid email or weak password
/// - `409 Conflict` - The email already has credentials
/// - `502 Bad Gateway` / `504 Gateway Timeout` - Authentication service failure
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = AUTH_TAG,
    request_body = SignUpRequestDto,
    responses(
        (status = 201, description = "Credentials stored", body = SignUpDto),
        (status = 400, description = "Invalid email or weak password", body = ErrorDto),
        (status = 409, description = "Credentials already exist", body = ErrorDto),
        (status = 502, description = "Authentication service unavailable", body = ErrorDto),
        (status = 504, description = "Authentication service timed out", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<SignUpRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.auth, &state.verifier);

    let params = SignUpParams::from_dto(payload);
    let email = params.email.clone();

    service.sign_up(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpDto {
            email,
            created: true,
        }),
    ))
}

/// Check an email and password.
///
/// An unknown email and a wrong password produce the same `401` response.
///
/// # Arguments
/// - `state` - Application state containing the auth client and verifier
/// - `payload` - Email and plaintext password
///
/// # Returns
/// - `200 OK` - Password matches the stored credentials
/// - `400 Bad Request` - Malformed email or empty password
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `502 Bad Gateway` / `504 Gateway Timeout` - Authentication service failure
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login accepted", body = LoginDto),
        (status = 400, description = "Malformed credentials", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 502, description = "Authentication service unavailable", body = ErrorDto),
        (status = 504, description = "Authentication service timed out", body = ErrorDto)
    ),
)]
pub async fn log_in(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.auth, &state.verifier);

    let params = LoginParams::from_dto(payload);
    let email = params.email.clone();

    service.log_in(params).await?;

    Ok((
        StatusCode::OK,
        Json(LoginDto {
            email,
            authenticated: true,
        }),
    ))
}
