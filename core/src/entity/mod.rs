pub mod allergens;
pub mod products;
pub mod reactions;
pub mod users;
