use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAllergenValidator {
    #[validate(length(min = 1, message = "name can't be blank"))]
    pub name: String,

    #[validate(length(min = 1, message = "substances can't be blank"))]
    pub substances: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAllergenValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name can't be blank"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "substances can't be blank"))]
    pub substances: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_substances_are_rejected() {
        let payload = CreateAllergenValidator {
            name: "Dairy".to_string(),
            substances: "".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_valid_payload_passes() {
        let payload = CreateAllergenValidator {
            name: "Dairy".to_string(),
            substances: "Milk, Casein, Whey".to_string(),
        };
        assert!(payload.validate().is_ok());
    }
}
