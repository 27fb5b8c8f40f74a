//! User HTTP handlers.
//!
//! - GET /api/v1/users - List users
//! - GET /api/v1/users/{user_id} - Get user by ID
//! - POST /api/v1/users - Create user
//! - PUT /api/v1/users/{user_id} - Replace user data
//! - DELETE /api/v1/users/{user_id} - Delete user

use crate::{
    error::AppError,
    models::user::{CreateUserRequest, CreateUserResponse, GetUserResponse, GetUsersResponse},
    services::user_service,
    store::SharedStore,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// List all users in creation order.
pub async fn list_users(State(store): State<SharedStore>) -> Json<GetUsersResponse> {
    Json(GetUsersResponse {
        users: store.list_users().await,
    })
}

/// Get a user by ID.
///
/// # Response
///
/// - **Success (200 OK)**: `{ "user": { ... } }`
/// - **Error (404)**: User not found
pub async fn get_user(
    State(store): State<SharedStore>,
    Path(user_id): Path<String>,
) -> Result<Json<GetUserResponse>, AppError> {
    let user = store.get_user(&user_id).await?;
    Ok(Json(GetUserResponse { user }))
}

/// Create a user.
///
/// # Request Body
///
/// ```json
/// {
///   "email": "tom@example.com",
///   "lastName": "Smith",
///   "firstName": "Tom",
///   "middleName": "B.",
///   "phoneNumber": "+1-555-123-4567"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{ "user": { "id": ..., ... } }`
/// - **Error (400)**: Email without `@`
pub async fn create_user(
    State(store): State<SharedStore>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, AppError> {
    let user = user_service::create_user(&store, request).await?;
    Ok(Json(CreateUserResponse { user }))
}

/// Replace the data of an existing user. Takes the same body as create.
pub async fn update_user(
    State(store): State<SharedStore>,
    Path(user_id): Path<String>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<GetUserResponse>, AppError> {
    user_service::validate(&request)?;

    let user = store.update_user(&user_id, request).await?;
    Ok(Json(GetUserResponse { user }))
}

/// Delete a user. Answers 204 with an empty body.
pub async fn delete_user(
    State(store): State<SharedStore>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
    store.delete_user(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
