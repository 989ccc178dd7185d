// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{ChangeStatusCommand, CreateUserCommand, UpdateUserInfoCommand},
    dto::{PageDto, UserDto},
    error::ApplicationError,
    queries::users::SearchUsersQuery,
};
use crate::domain::user::{DEFAULT_PAGE_SIZE, PageRequest, UserStatus};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeStatusRequest {
    pub status: UserStatus,
}

fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Search filters plus pagination. Absent filters impose no constraint;
/// range bounds are RFC 3339 datetimes.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersParams {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_to: Option<DateTime<Utc>>,
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created.", body = UserDto),
        (status = 400, description = "Invalid email, name or password.", body = crate::presentation::http::error::ErrorBody),
        (status = 409, description = "Email already in use.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<Response> {
    let command = CreateUserCommand {
        email: payload.email,
        name: payload.name,
        password: payload.password,
    };

    let user = state
        .services
        .user_commands
        .create_user(command)
        .await
        .into_http()?;

    let location = format!("/api/v1/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(user),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier.")),
    responses(
        (status = 200, description = "The requested user.", body = UserDto),
        (status = 404, description = "No user with this id.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "Matching users, paginated.", body = PageDto<UserDto>),
        (status = 400, description = "Invalid filter or pagination.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListUsersParams>,
) -> HttpResult<Json<PageDto<UserDto>>> {
    let page = PageRequest::new(params.page, params.size)
        .map_err(ApplicationError::from)
        .into_http()?;

    let query = SearchUsersQuery {
        email: params.email,
        name: params.name,
        created_from: params.created_from,
        created_to: params.created_to,
        page,
    };

    state
        .services
        .user_queries
        .search_users(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier.")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated.", body = UserDto),
        (status = 400, description = "Invalid name.", body = crate::presentation::http::error::ErrorBody),
        (status = 404, description = "No user with this id.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = UpdateUserInfoCommand {
        user_id: id,
        name: payload.name,
    };

    state
        .services
        .user_commands
        .update_user_info(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}/status",
    params(("id" = i64, Path, description = "User identifier.")),
    request_body = ChangeStatusRequest,
    responses(
        (status = 200, description = "Status changed.", body = UserDto),
        (status = 404, description = "No user with this id.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn change_status(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<ChangeStatusRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = ChangeStatusCommand {
        user_id: id,
        status: payload.status,
    };

    state
        .services
        .user_commands
        .change_status(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier.")),
    responses(
        (status = 204, description = "User deleted."),
        (status = 404, description = "No user with this id.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .delete_user(id)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
