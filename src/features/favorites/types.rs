//! Wire types for the favorites API.

use crate::features::locations::types::LocationListItem;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Favorite {
    pub id: i64,
    pub user: i64,
    pub location: i64,
    pub location_details: LocationListItem,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ToggleRequest {
    pub location_id: i64,
    pub note: String,
}

/// Answer from `/favorites/toggle/`: `favorite` is present only when the
/// location was just favorited.
#[derive(Clone, Debug, Deserialize)]
pub struct ToggleResponse {
    pub message: String,
    pub favorited: bool,
    #[serde(default)]
    pub favorite: Option<Favorite>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CheckResponse {
    pub favorited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_response_parses_both_directions() {
        let added: ToggleResponse = serde_json::from_str(
            r#"{
                "message": "Adicionado aos favoritos",
                "favorited": true,
                "favorite": {
                    "id": 5,
                    "user": 2,
                    "location": 10,
                    "location_details": {
                        "id": 10,
                        "name": "Feira do Bixiga",
                        "location_type": "FAIR",
                        "producer_name": "Sítio Boa Vista",
                        "city": "São Paulo",
                        "state": "SP",
                        "is_verified": true
                    },
                    "note": "",
                    "created_at": "2025-03-01T10:00:00Z"
                }
            }"#,
        )
        .expect("deserialize");
        assert!(added.favorited);
        assert_eq!(added.favorite.as_ref().map(|f| f.location), Some(10));

        let removed: ToggleResponse = serde_json::from_str(
            r#"{"message": "Removido dos favoritos", "favorited": false}"#,
        )
        .expect("deserialize");
        assert!(!removed.favorited);
        assert!(removed.favorite.is_none());
    }
}
