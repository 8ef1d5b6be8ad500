//! Client wrappers for the auth API endpoints. These helpers centralize
//! endpoint paths and keep credential payloads out of route code; the token
//! pair endpoints never carry a bearer.

use crate::{
    app_lib::{AppError, get_json, get_json_with_bearer, patch_json, post_json},
    features::auth::types::{
        AuthTokens, LoginCredentials, ProfileUpdate, RegisterData, RegisterResponse, User,
    },
};

/// Exchanges credentials for an access/refresh token pair.
/// Nothing is persisted here; the session store owns that decision.
pub async fn obtain_tokens(credentials: &LoginCredentials) -> Result<AuthTokens, AppError> {
    post_json("/token/", credentials).await
}

/// Creates an account. The caller is responsible for the follow-up login.
pub async fn register(data: &RegisterData) -> Result<RegisterResponse, AppError> {
    post_json("/users/register/", data).await
}

/// Fetches the current user with the persisted access token.
pub async fn fetch_current_user() -> Result<User, AppError> {
    get_json("/users/me/").await
}

/// Fetches the current user with an explicit bearer, used by the login
/// sequence before the fresh token pair is persisted.
pub async fn fetch_current_user_with(bearer: &str) -> Result<User, AppError> {
    get_json_with_bearer("/users/me/", bearer).await
}

/// Applies a partial profile update and returns the refreshed profile.
pub async fn update_profile(update: &ProfileUpdate) -> Result<User, AppError> {
    patch_json("/users/me/", update).await
}
