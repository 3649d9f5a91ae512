//! # User Types
//!
//! Account records served by the auth microservice. The wire format uses
//! the service's Spanish field names; the admin flag may arrive as null.

use serde::{Deserialize, Serialize};

/// A registered user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identity
    pub id: i64,

    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,

    /// Login email
    pub email: String,

    /// Contact phone number
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,

    /// Admin flag; the service omits or nulls it for regular accounts
    #[serde(rename = "isAdmin", default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
}

impl User {
    /// Whether this account has admin privileges
    pub fn is_admin(&self) -> bool {
        self.admin.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_user() {
        let json = r#"{
            "id": 7,
            "nombre": "Ana Rojas",
            "email": "ana@example.cl",
            "telefono": "+56911112222",
            "isAdmin": false
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Ana Rojas");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_parse_null_admin_and_phone() {
        let json = r#"{"id": 3, "nombre": "Max", "email": "max@example.cl", "telefono": null, "isAdmin": null}"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.phone, None);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_parse_ignores_password_field() {
        // The service serializes the stored record verbatim, including
        // the credential column. It must never leak into this type.
        let json = r#"{"id": 1, "nombre": "Eva", "email": "eva@example.cl", "contrasena": "s3cret", "isAdmin": true}"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
        assert!(!serde_json::to_string(&user).unwrap().contains("s3cret"));
    }
}
