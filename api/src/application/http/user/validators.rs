use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "first_name can't be blank"))]
    pub first_name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "last_name can't be blank"))]
    pub last_name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "address can't be blank"))]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "phone can't be blank"))]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_first_name_is_rejected() {
        let payload = UpdateProfileValidator {
            first_name: Some("".to_string()),
            last_name: None,
            address: None,
            phone: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_omitted_fields_pass() {
        let payload = UpdateProfileValidator {
            first_name: None,
            last_name: Some("Martin".to_string()),
            address: None,
            phone: None,
        };
        assert!(payload.validate().is_ok());
    }
}
