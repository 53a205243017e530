//! User handlers.
//!
//! Each handler forwards to one `UserService` call. Absence reported by the
//! service (`None` / `false`) is turned into a 404 here.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use common::{AppError, AppResult, OptionExt};
use domain::User;

use crate::extractors::{AppJson, AppPath};
use crate::state::AppState;

/// User creation request. The caller supplies the id.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserRequest {
    #[schema(example = 2)]
    pub id: i32,
    #[schema(example = "Jane")]
    pub name: String,
    #[schema(example = "jane@email.com")]
    pub email: String,
    pub password: String,
    #[schema(example = "User")]
    pub role: String,
    pub is_active: bool,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        User::new(
            req.id,
            req.name,
            req.email,
            req.password,
            req.role,
            req.is_active,
        )
    }
}

/// Full overwrite of a user's mutable fields.
///
/// The id comes from the path; a body echoing `id` or the timestamps is rejected.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@email.com")]
    pub email: String,
    pub password: String,
    #[schema(example = "User")]
    pub role: String,
    pub is_active: bool,
}

impl UpdateUserRequest {
    /// Build the change set for the user with the given id
    pub fn into_user(self, id: i32) -> User {
        User::new(
            id,
            self.name,
            self.email,
            self.password,
            self.role,
            self.is_active,
        )
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?.ok_or_not_found()?;
    Ok(Json(user))
}

/// Create user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed request body, missing or unknown fields (timestamps are set by the server)")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(payload.into()).await?;
    tracing::info!(id = user.id, "Created user");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update user
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Malformed request, including bodies carrying fields other than the five editable ones (id, createdAt and updatedAt are rejected)"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .update_user(payload.into_user(id))
        .await?
        .ok_or_not_found()?;
    Ok(Json(user))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<StatusCode> {
    if !state.user_service.delete_user(id).await? {
        return Err(AppError::NotFound);
    }

    tracing::info!(id, "Deleted user");
    Ok(StatusCode::NO_CONTENT)
}
