//! Wire types for sale locations ("feiras") and their addresses.

use crate::features::products::types::ProductListItem;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    Fair,
    Store,
    Farm,
    Delivery,
    Other,
}

impl LocationType {
    /// Wire string for the variant, used by form selects and filters.
    pub fn code(self) -> &'static str {
        match self {
            LocationType::Fair => "FAIR",
            LocationType::Store => "STORE",
            LocationType::Farm => "FARM",
            LocationType::Delivery => "DELIVERY",
            LocationType::Other => "OTHER",
        }
    }

    /// Parses a wire string back into a variant.
    pub fn from_code(code: &str) -> Option<LocationType> {
        LocationType::all()
            .into_iter()
            .find(|variant| variant.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            LocationType::Fair => "Feira",
            LocationType::Store => "Loja",
            LocationType::Farm => "Fazenda",
            LocationType::Delivery => "Somente entrega",
            LocationType::Other => "Outro",
        }
    }

    /// Every type, in the order shown by select inputs and filters.
    pub fn all() -> [LocationType; 5] {
        [
            LocationType::Fair,
            LocationType::Store,
            LocationType::Farm,
            LocationType::Delivery,
            LocationType::Other,
        ]
    }
}

/// Full address as returned inside a location detail.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub number: String,
    #[serde(default)]
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default, deserialize_with = "coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "coordinate")]
    pub longitude: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LocationImage {
    pub id: i64,
    pub image: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub order: i64,
}

/// Full location detail.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Location {
    pub id: i64,
    pub producer: i64,
    pub producer_name: String,
    pub name: String,
    pub location_type: LocationType,
    #[serde(default)]
    pub description: String,
    pub address: Address,
    #[serde(default)]
    pub products: Vec<ProductListItem>,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub images: Vec<LocationImage>,
    #[serde(default)]
    pub operation_days: String,
    #[serde(default)]
    pub operation_hours: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub whatsapp: String,
    pub is_active: bool,
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Compact shape used by list, map, and favorite endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LocationListItem {
    pub id: i64,
    pub name: String,
    pub location_type: LocationType,
    pub producer_name: String,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default, deserialize_with = "coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "coordinate")]
    pub longitude: Option<f64>,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub product_count: i64,
    pub is_verified: bool,
    #[serde(default)]
    pub is_favorited: Option<bool>,
}

/// Address fields for create/update; coordinates are optional.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AddressPayload {
    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// JSON body for creating or updating a location.
#[derive(Clone, Debug, Serialize)]
pub struct LocationPayload {
    pub name: String,
    pub location_type: LocationType,
    pub description: String,
    pub address: AddressPayload,
    pub operation_days: String,
    pub operation_hours: String,
    pub phone: String,
    pub whatsapp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<i64>>,
}

/// Coordinates arrive as JSON numbers, decimal strings, or null depending on
/// the serializer; all three map to `Option<f64>`.
fn coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(value)) => Some(value),
        Some(Raw::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_type_uses_screaming_wire_strings() {
        let json = serde_json::to_string(&LocationType::Delivery).expect("serialize");
        assert_eq!(json, r#""DELIVERY""#);

        let parsed: LocationType = serde_json::from_str(r#""FAIR""#).expect("deserialize");
        assert_eq!(parsed, LocationType::Fair);
    }

    #[test]
    fn location_type_codes_round_trip() {
        for variant in LocationType::all() {
            assert_eq!(LocationType::from_code(variant.code()), Some(variant));

            let json = serde_json::to_string(&variant).expect("serialize");
            assert_eq!(json, format!("\"{}\"", variant.code()));
        }
        assert_eq!(LocationType::from_code("ALL"), None);
    }

    #[test]
    fn list_item_parses_decimal_string_coordinates() {
        let json = r#"{
            "id": 10,
            "name": "Feira do Bixiga",
            "location_type": "FAIR",
            "producer_name": "Sítio Boa Vista",
            "main_image": null,
            "latitude": "-23.561414",
            "longitude": "-46.655881",
            "city": "São Paulo",
            "state": "SP",
            "product_count": 4,
            "is_verified": true
        }"#;

        let item: LocationListItem = serde_json::from_str(json).expect("deserialize");
        assert_eq!(item.latitude, Some(-23.561414));
        assert_eq!(item.longitude, Some(-46.655881));
        assert_eq!(item.is_favorited, None);
    }

    #[test]
    fn list_item_parses_numeric_and_null_coordinates() {
        let json = r#"{
            "id": 11,
            "name": "Entrega Vila Mariana",
            "location_type": "DELIVERY",
            "producer_name": "Horta da Serra",
            "latitude": -23.58,
            "longitude": null,
            "city": "São Paulo",
            "state": "SP",
            "is_verified": false
        }"#;

        let item: LocationListItem = serde_json::from_str(json).expect("deserialize");
        assert_eq!(item.latitude, Some(-23.58));
        assert_eq!(item.longitude, None);
        assert_eq!(item.product_count, 0);
    }

    #[test]
    fn payload_omits_absent_coordinates_and_products() {
        let payload = LocationPayload {
            name: "Feira da Praça".to_string(),
            location_type: LocationType::Fair,
            description: String::new(),
            address: AddressPayload {
                street: "Praça Central".to_string(),
                number: "s/n".to_string(),
                city: "Campinas".to_string(),
                state: "SP".to_string(),
                zip_code: "13000-000".to_string(),
                ..AddressPayload::default()
            },
            operation_days: "Sábados".to_string(),
            operation_hours: "07h às 13h".to_string(),
            phone: String::new(),
            whatsapp: String::new(),
            product_ids: None,
        };

        let json = serde_json::to_string(&payload).expect("serialize");
        assert!(!json.contains("latitude"));
        assert!(!json.contains("product_ids"));
        assert!(json.contains(r#""location_type":"FAIR""#));
    }
}
