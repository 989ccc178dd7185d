// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::create_user,
        crate::presentation::http::controllers::users::get_user,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::update_user,
        crate::presentation::http::controllers::users::change_status,
        crate::presentation::http::controllers::users::delete_user,
        crate::presentation::http::controllers::chat::openai_completion,
        crate::presentation::http::controllers::chat::xai_completion,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorBody,
            crate::presentation::http::controllers::users::CreateUserRequest,
            crate::presentation::http::controllers::users::UpdateUserRequest,
            crate::presentation::http::controllers::users::ChangeStatusRequest,
            crate::presentation::http::controllers::chat::ChatRequest,
            crate::presentation::http::controllers::chat::XaiChatRequest,
            crate::application::dto::UserDto,
            crate::application::dto::PageDto<crate::application::dto::UserDto>,
            crate::application::dto::ChatReplyDto,
            crate::domain::user::UserStatus
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "Chat", description = "Chat completion proxy endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Userhub API",
        description = "User management backend with chat proxy endpoints",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
