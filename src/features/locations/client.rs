//! Client wrappers for the locations API. Listing and map data are public;
//! mutations require the producer's bearer and ownership is enforced by the
//! backend.

use crate::{
    app_lib::{AppError, delete_json, get_json, patch_json, post_json},
    features::locations::types::{Location, LocationListItem, LocationPayload},
};

/// Fetches every active location.
pub async fn list_locations() -> Result<Vec<LocationListItem>, AppError> {
    get_json("/locations/").await
}

/// Fetches one location with address, images, and products.
pub async fn get_location(id: i64) -> Result<Location, AppError> {
    get_json(&format!("/locations/{id}/")).await
}

/// Fetches the compact marker list for the discovery map.
pub async fn map_data() -> Result<Vec<LocationListItem>, AppError> {
    get_json("/locations/map_data/").await
}

/// Fetches the authenticated producer's own locations.
pub async fn my_locations() -> Result<Vec<LocationListItem>, AppError> {
    get_json("/locations/my_locations/").await
}

pub async fn create_location(payload: &LocationPayload) -> Result<Location, AppError> {
    post_json("/locations/", payload).await
}

pub async fn update_location(id: i64, payload: &LocationPayload) -> Result<Location, AppError> {
    patch_json(&format!("/locations/{id}/"), payload).await
}

pub async fn delete_location(id: i64) -> Result<(), AppError> {
    delete_json(&format!("/locations/{id}/")).await
}
