use utoipa::OpenApi;

use crate::model::{
    api::ErrorDto,
    user::{CreateUserDto, UserDto},
};

/// OpenAPI document for the HTTP surface, served at `/api/docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::user::get_users,
        crate::server::controller::user::create_user,
    ),
    components(schemas(UserDto, CreateUserDto, ErrorDto)),
    tags((name = "users", description = "User records"))
)]
pub struct ApiDoc;
