//! Request/response types for the email processing operation

use serde::{Deserialize, Serialize};

use super::entity::EntityMatch;

/// Incoming request body for the processing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRequest {
    pub email_body: String,
}

/// Full result of processing one email: the verbatim input, every masked
/// entity in left-to-right reading order, the masked text, and the predicted
/// support category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailResult {
    pub input_email_body: String,
    pub list_of_masked_entities: Vec<EntityMatch>,
    pub masked_email: String,
    pub category_of_the_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::entity::{EntityKind, Span};

    #[test]
    fn result_serializes_with_contract_field_names() {
        let result = EmailResult {
            input_email_body: "Contact me at john.doe@example.com".to_string(),
            list_of_masked_entities: vec![EntityMatch::new(
                Span::new(14, 34),
                EntityKind::Email,
                "john.doe@example.com",
            )],
            masked_email: "Contact me at [email]".to_string(),
            category_of_the_email: "Request".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("input_email_body").is_some());
        assert!(json.get("list_of_masked_entities").is_some());
        assert!(json.get("masked_email").is_some());
        assert_eq!(json["category_of_the_email"], "Request");
        assert_eq!(json["list_of_masked_entities"][0]["position"], serde_json::json!([14, 34]));
    }
}
