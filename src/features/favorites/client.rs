//! Client wrappers for the favorites API. All endpoints require an
//! authenticated consumer; the backend scopes results to the current user.

use crate::{
    app_lib::{AppError, delete_json, get_json, post_json},
    features::favorites::types::{CheckResponse, Favorite, ToggleRequest, ToggleResponse},
};

/// Fetches the current user's favorites.
pub async fn list_favorites() -> Result<Vec<Favorite>, AppError> {
    get_json("/favorites/").await
}

/// Adds or removes a favorite for the location, reporting the new state.
pub async fn toggle_favorite(location_id: i64, note: Option<&str>) -> Result<ToggleResponse, AppError> {
    let request = ToggleRequest {
        location_id,
        note: note.unwrap_or_default().to_string(),
    };
    post_json("/favorites/toggle/", &request).await
}

/// Checks whether the location is already favorited.
pub async fn check_favorite(location_id: i64) -> Result<CheckResponse, AppError> {
    get_json(&format!("/favorites/check/?location_id={location_id}")).await
}

/// Removes a favorite by its own id (not the location id).
pub async fn remove_favorite(id: i64) -> Result<(), AppError> {
    delete_json(&format!("/favorites/{id}/")).await
}
