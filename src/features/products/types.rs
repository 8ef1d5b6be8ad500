//! Wire types for the product catalog and its categories.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Compact shape used inside location details and product lists.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductListItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub category: Option<i64>,
    pub description: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// The catalog endpoints answer either a plain array or a paginated page
/// (`count`/`next`/`previous`/`results`); both decode to the same list.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated(Page<T>),
    Plain(Vec<T>),
}

#[derive(Clone, Debug, Deserialize)]
pub struct Page<T> {
    pub count: i64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn into_results(self) -> Vec<T> {
        match self {
            ListResponse::Paginated(page) => page.results,
            ListResponse::Plain(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_accepts_plain_arrays() {
        let parsed: ListResponse<ProductListItem> = serde_json::from_str(
            r#"[{"id": 1, "name": "Alface", "category_name": "Verduras", "image": null}]"#,
        )
        .expect("deserialize");

        let items = parsed.into_results();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Alface");
    }

    #[test]
    fn list_response_accepts_paginated_pages() {
        let parsed: ListResponse<ProductListItem> = serde_json::from_str(
            r#"{
                "count": 2,
                "next": null,
                "previous": null,
                "results": [
                    {"id": 1, "name": "Alface"},
                    {"id": 2, "name": "Tomate"}
                ]
            }"#,
        )
        .expect("deserialize");

        let items = parsed.into_results();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Tomate");
    }

    #[test]
    fn product_parses_with_nullable_category() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 9,
                "name": "Mel silvestre",
                "category": null,
                "category_name": "",
                "description": "Mel de abelhas nativas",
                "image": null,
                "is_active": true,
                "created_at": "2025-02-01T00:00:00Z",
                "updated_at": "2025-02-01T00:00:00Z"
            }"#,
        )
        .expect("deserialize");

        assert_eq!(product.category, None);
        assert!(product.is_active);
    }
}
