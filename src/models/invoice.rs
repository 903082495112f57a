use serde::{Deserialize, Serialize};

/// Invoice status value meaning payment has been received.
const STATUS_PAID: &str = "paid";

/// A billing document issued to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub invoice_number: String,
    pub client: i64,
    pub total: f64,
    pub status: String,
}

impl Invoice {
    pub fn is_outstanding(&self) -> bool {
        self.status != STATUS_PAID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invoice_list() {
        let json = r#"[
            {"id": 1, "invoice_number": "INV-2026-001", "client": 4, "total": 125000.5, "status": "sent"},
            {"id": 2, "invoice_number": "INV-2026-002", "client": 4, "total": 80000, "status": "paid"}
        ]"#;

        let invoices: Vec<Invoice> = serde_json::from_str(json).expect("failed to parse invoices");
        assert_eq!(invoices.len(), 2);
        assert!(invoices[0].is_outstanding());
        assert!(!invoices[1].is_outstanding());
        assert_eq!(invoices[1].total, 80000.0);
    }
}
