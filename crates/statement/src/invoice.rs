use serde::{Deserialize, Serialize};

use playbill_core::{DomainError, DomainResult, PlayId};

/// One performance on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// Customer invoice: performances in billing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }

    /// Parse the `[{ "customer": .., "performances": [..] }]` invoice file format.
    pub fn list_from_json(json: &str) -> DomainResult<Vec<Invoice>> {
        serde_json::from_str(json).map_err(|e| DomainError::validation(format!("invoices: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_invoice_file() {
        let invoices = Invoice::list_from_json(
            r#"[{
                "customer": "BigCo",
                "performances": [
                    {"playID": "hamlet", "audience": 55},
                    {"playID": "as-like", "audience": 35}
                ]
            }]"#,
        )
        .unwrap();

        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].customer, "BigCo");
        assert_eq!(invoices[0].performances[1], Performance::new("as-like", 35));
    }

    #[test]
    fn negative_audience_is_rejected() {
        let err = Invoice::list_from_json(
            r#"[{"customer": "BigCo", "performances": [{"playID": "hamlet", "audience": -1}]}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
