use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{CreateUserParam, UpdateUserParam},
        response::ApiResponse,
        service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

pub const USER_CREATED: &str = "Utilisateur créé avec succès";
pub const USER_UPDATED: &str = "Utilisateur mis à jour avec succès";
pub const USER_DELETED: &str = "Utilisateur supprimé avec succès";

#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = SuccessDto<Vec<UserDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(state.users.as_ref())
        .get_all_users()
        .await?;

    let dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok(ApiResponse::list(dto))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = SuccessDto<UserDto>),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let user = UserService::new(state.users.as_ref())
        .get_user_by_id(id)
        .await?;

    Ok(ApiResponse::ok(user.into_dto()))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = SuccessDto<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user = UserService::new(state.users.as_ref())
        .create_user(CreateUserParam::from_dto(payload))
        .await?;

    Ok(ApiResponse::created(user.into_dto(), USER_CREATED))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = SuccessDto<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let user = UserService::new(state.users.as_ref())
        .update_user(id, UpdateUserParam::from_dto(payload))
        .await?;

    Ok(ApiResponse::ok(user.into_dto()).with_message(USER_UPDATED))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = SuccessDto<UserDto>),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let user = UserService::new(state.users.as_ref())
        .delete_user(id)
        .await?;

    Ok(ApiResponse::ok(user.into_dto()).with_message(USER_DELETED))
}
