use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn no_semicolons(value: &str) -> Result<(), ValidationError> {
    if value.contains(';') {
        return Err(ValidationError::new("no_semicolons")
            .with_message("contains a ';' which is not a valid character".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductValidator {
    #[validate(length(min = 3, message = "name must be at least 3 characters"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "ingredients is required"),
        custom(function = no_semicolons)
    )]
    pub ingredients: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductValidator {
    #[serde(default)]
    #[validate(length(min = 3, message = "name must be at least 3 characters"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(custom(function = no_semicolons))]
    pub ingredients: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_character_name_is_rejected() {
        let payload = CreateProductValidator {
            name: "ab".to_string(),
            ingredients: "Milk".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_semicolon_in_ingredients_is_rejected() {
        let payload = CreateProductValidator {
            name: "Cheese".to_string(),
            ingredients: "Milk; Salt".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_valid_payload_passes() {
        let payload = CreateProductValidator {
            name: "Cheese".to_string(),
            ingredients: "Milk, Salt".to_string(),
        };
        assert!(payload.validate().is_ok());
    }
}
