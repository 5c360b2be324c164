//! Product domain entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A catalog product. `teste` is a legacy column kept for schema
/// compatibility; nothing reads or validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub amount: Option<Decimal>,
    pub active: bool,
    pub teste: bool,
}

/// Incoming product payload for create/update. Not persisted as-is: the id is
/// assigned by the store on create and taken from the path on update, so any
/// id in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductPayload {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[validate(
        required(message = "The Name field is required."),
        length(min = 1, max = 80, message = "Name must be between 1 and 80 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "The Description field is required."),
        length(
            min = 1,
            max = 250,
            message = "Description must be between 1 and 250 characters."
        )
    )]
    pub description: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub amount: Option<Decimal>,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub teste: bool,
}

impl ProductPayload {
    /// Build the entity under the given id. Callers validate first; a payload
    /// that failed validation never reaches this point.
    pub fn into_product(self, id: Uuid) -> Product {
        Product {
            id,
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price,
            amount: self.amount,
            active: self.active,
            teste: self.teste,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> ProductPayload {
        ProductPayload {
            id: None,
            name: Some("Keyboard".to_string()),
            description: Some("Mechanical keyboard".to_string()),
            price: Some(79.9),
            amount: None,
            active: true,
            teste: false,
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn missing_name_is_rejected() {
        let mut payload = valid_payload();
        payload.name = None;
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn overlong_name_is_rejected() {
        let mut payload = valid_payload();
        payload.name = Some("x".repeat(81));
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn overlong_description_is_rejected() {
        let mut payload = valid_payload();
        payload.description = Some("x".repeat(251));
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn into_product_ignores_body_id() {
        let mut payload = valid_payload();
        payload.id = Some(Uuid::new_v4());
        let id = Uuid::new_v4();
        let product = payload.into_product(id);
        assert_eq!(product.id, id);
    }
}
