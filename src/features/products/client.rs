//! Client wrappers for the product catalog API. List endpoints unwrap the
//! optional pagination envelope so screens always receive plain vectors.

use crate::{
    app_lib::{AppError, delete_json, get_json, post_json, put_json},
    features::products::types::{
        Category, CategoryPayload, ListResponse, Product, ProductListItem, ProductPayload,
    },
};

pub async fn list_products() -> Result<Vec<ProductListItem>, AppError> {
    let response: ListResponse<ProductListItem> = get_json("/products/").await?;
    Ok(response.into_results())
}

pub async fn get_product(id: i64) -> Result<Product, AppError> {
    get_json(&format!("/products/{id}/")).await
}

pub async fn create_product(payload: &ProductPayload) -> Result<Product, AppError> {
    post_json("/products/", payload).await
}

pub async fn update_product(id: i64, payload: &ProductPayload) -> Result<Product, AppError> {
    put_json(&format!("/products/{id}/"), payload).await
}

pub async fn delete_product(id: i64) -> Result<(), AppError> {
    delete_json(&format!("/products/{id}/")).await
}

pub async fn list_categories() -> Result<Vec<Category>, AppError> {
    let response: ListResponse<Category> = get_json("/products/categories/").await?;
    Ok(response.into_results())
}

pub async fn create_category(payload: &CategoryPayload) -> Result<Category, AppError> {
    post_json("/products/categories/", payload).await
}

pub async fn update_category(id: i64, payload: &CategoryPayload) -> Result<Category, AppError> {
    put_json(&format!("/products/categories/{id}/"), payload).await
}

pub async fn delete_category(id: i64) -> Result<(), AppError> {
    delete_json(&format!("/products/categories/{id}/")).await
}
