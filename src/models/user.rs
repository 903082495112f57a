// Allow dead code: account structs carry all API fields for completeness
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Account identity returned by the authentication endpoint.
///
/// The client carries these fields without interpreting them beyond
/// display; the backend owns what a user "is".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Name if the account has one, email otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Workspace a user belongs to. Resources reference tenants by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub subdomain: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_display_name_prefers_name() {
        let user = User {
            id: 1,
            email: "a@b.com".to_string(),
            name: Some("Amina".to_string()),
        };
        assert_eq!(user.display_name(), "Amina");
    }

    #[test]
    fn test_user_display_name_falls_back_to_email() {
        let user = User {
            id: 1,
            email: "a@b.com".to_string(),
            name: None,
        };
        assert_eq!(user.display_name(), "a@b.com");
    }

    #[test]
    fn test_parse_user_without_name() {
        let json = r#"{"id": 7, "email": "dev@freelancehq.test"}"#;
        let user: User = serde_json::from_str(json).expect("failed to parse user");
        assert_eq!(user.id, 7);
        assert_eq!(user.email, "dev@freelancehq.test");
        assert!(user.name.is_none());
    }
}
