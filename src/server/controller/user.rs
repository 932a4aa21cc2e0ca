use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError, model::user::CreateUserParam, service::user::UserService,
        state::AppState,
    },
};

/// GET /users - List all users
///
/// Returns every stored user in the order they were created.
///
/// # Returns
/// - `200 OK`: JSON array of UserDto
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users in insertion order", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    let users = user_service.get_all().await?;

    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// POST /user - Create a user
///
/// Stores a user with the given name and email and returns the stored record,
/// including its generated id.
///
/// # Request Body
/// - `name`: Display name (must not be blank)
/// - `email`: Email address (must not be blank, format is not checked)
///
/// # Returns
/// - `201 Created`: The created UserDto
/// - `400 Bad Request`: Name or email is blank
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    post,
    path = "/user",
    tag = "users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Name or email missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    let user = user_service
        .create(CreateUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
