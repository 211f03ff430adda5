pub mod create_allergen;
pub mod delete_allergen;
pub mod get_allergen;
pub mod get_allergens;
pub mod update_allergen;
