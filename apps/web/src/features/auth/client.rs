//! Client wrappers for the hosted backend's identity endpoints. Session state
//! lives in `HttpOnly` cookies; these calls only read the resulting identity.

use crate::{
    app_lib::{
        get_optional_json_with_credentials, post_empty_with_credentials,
        post_json_with_credentials_response, AppError,
    },
    features::auth::types::{RoleResponse, SessionResponse, SignInRequest},
};

/// Fetches the current session using cookie-based auth.
/// Returns `None` when the session is missing or expired.
pub async fn fetch_session() -> Result<Option<SessionResponse>, AppError> {
    get_optional_json_with_credentials("/v1/auth/session").await
}

/// Fetches the role assigned to the signed-in user.
/// Returns `None` when the backend has no role record for them.
pub async fn fetch_role() -> Result<Option<RoleResponse>, AppError> {
    get_optional_json_with_credentials("/v1/me/role").await
}

/// Signs in with email and password; the backend sets the session cookie.
pub async fn sign_in(request: &SignInRequest) -> Result<SessionResponse, AppError> {
    post_json_with_credentials_response("/v1/auth/sign-in", request).await
}

/// Clears the current session on the server.
pub async fn sign_out() -> Result<(), AppError> {
    post_empty_with_credentials("/v1/auth/logout").await
}
