//! Wire types for authentication and the current-user profile. Credential
//! payloads must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Consumer,
    Producer,
}

impl UserRole {
    /// Label shown in profile badges and the signup form.
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Consumer => "Consumidor",
            UserRole::Producer => "Produtor",
        }
    }
}

/// Current-user profile as returned by `/users/me/`. The `is_active` flag is
/// optional on the wire; absence means the account is active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub full_name: String,
    pub user_type: UserRole,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Access/refresh pair returned by `/token/`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserRole,
    pub phone: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

/// Partial profile update for PATCH `/users/me/`; absent fields are left
/// untouched by the server.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(role: UserRole) -> User {
        User {
            id: 7,
            email: "maria@example.com".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Souza".to_string(),
            full_name: "Maria Souza".to_string(),
            user_type: role,
            phone: "(11) 99999-9999".to_string(),
            avatar: None,
            is_active: Some(true),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn user_role_uses_screaming_wire_strings() {
        let json = serde_json::to_string(&UserRole::Producer).expect("serialize");
        assert_eq!(json, r#""PRODUCER""#);

        let parsed: UserRole = serde_json::from_str(r#""CONSUMER""#).expect("deserialize");
        assert_eq!(parsed, UserRole::Consumer);
    }

    #[test]
    fn user_parses_with_optional_fields_absent() {
        let json = r#"{
            "id": 1,
            "email": "joao@example.com",
            "first_name": "João",
            "last_name": "Silva",
            "user_type": "PRODUCER"
        }"#;

        let user: User = serde_json::from_str(json).expect("deserialize");
        assert_eq!(user.user_type, UserRole::Producer);
        assert_eq!(user.is_active, None);
        assert_eq!(user.avatar, None);
        assert!(user.phone.is_empty());
    }

    #[test]
    fn profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            first_name: Some("Ana".to_string()),
            ..ProfileUpdate::default()
        };

        let json = serde_json::to_string(&update).expect("serialize");
        assert_eq!(json, r#"{"first_name":"Ana"}"#);
    }

    #[test]
    fn user_round_trips_through_json() {
        let user = sample_user(UserRole::Consumer);
        let json = serde_json::to_string(&user).expect("serialize");
        let parsed: User = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, user);
    }
}
