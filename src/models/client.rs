use serde::{Deserialize, Serialize};

/// A customer of the freelancer's workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub tenant: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

impl Client {
    /// Secondary line for list rows: company when set, email otherwise.
    pub fn subtitle(&self) -> &str {
        self.company
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_client_list() {
        let json = r#"[
            {"id": 1, "tenant": 1, "name": "Acme Ltd", "email": "ops@acme.test", "company": "Acme"},
            {"id": 2, "tenant": 1, "name": "Jane Wanjiru", "phone": "+254700000000"}
        ]"#;

        let clients: Vec<Client> = serde_json::from_str(json).expect("failed to parse clients");
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].subtitle(), "Acme");
        assert_eq!(clients[1].name, "Jane Wanjiru");
        assert!(clients[1].company.is_none());
    }

    #[test]
    fn test_subtitle_falls_back_to_email_then_dash() {
        let mut client = Client {
            id: 3,
            tenant: 1,
            name: "Solo".to_string(),
            email: Some("solo@client.test".to_string()),
            phone: None,
            company: None,
        };
        assert_eq!(client.subtitle(), "solo@client.test");

        client.email = None;
        assert_eq!(client.subtitle(), "-");
    }
}
