use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub ingredients: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(user_id: Uuid, name: String, ingredients: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            name,
            ingredients,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, name: Option<String>, ingredients: Option<String>) {
        let (now, _) = generate_timestamp();

        if let Some(n) = name {
            self.name = n;
        }
        if let Some(i) = ingredients {
            self.ingredients = i;
        }
        self.updated_at = now;
    }

    pub fn validate_name(name: &str) -> Result<(), CoreError> {
        if name.trim().len() < 3 {
            return Err(CoreError::Validation(
                "name must be at least 3 characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_ingredients(ingredients: &str) -> Result<(), CoreError> {
        if ingredients.trim().is_empty() {
            return Err(CoreError::Validation("ingredients can't be blank".to_string()));
        }
        if ingredients.contains(';') {
            return Err(CoreError::Validation(
                "ingredients contains a ';' which is not a valid character".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_shorter_than_three_chars_rejected() {
        assert!(Product::validate_name("ab").is_err());
        assert!(Product::validate_name("  ab  ").is_err());
        assert!(Product::validate_name("abc").is_ok());
    }

    #[test]
    fn test_ingredients_semicolon_rejected() {
        assert!(Product::validate_ingredients("Milk; Eggs").is_err());
        assert!(Product::validate_ingredients("").is_err());
        assert!(Product::validate_ingredients("Milk, Eggs").is_ok());
    }
}
