//! User service - validation shared by the REST and gRPC surfaces.

use crate::{
    error::AppError,
    models::user::{CreateUserRequest, User},
    store::GatewayStore,
};

/// Reject user data the gateway would not accept.
///
/// # Errors
///
/// - `InvalidRequest`: email without `@`
pub fn validate(request: &CreateUserRequest) -> Result<(), AppError> {
    if !request.email.contains('@') {
        return Err(AppError::InvalidRequest(format!(
            "Invalid email: {}",
            request.email
        )));
    }
    Ok(())
}

/// Validate and store a new user.
pub async fn create_user(
    store: &GatewayStore,
    request: CreateUserRequest,
) -> Result<User, AppError> {
    validate(&request)?;

    let user = store.create_user(request).await;
    tracing::info!(user_id = %user.id, "User created");

    Ok(user)
}
