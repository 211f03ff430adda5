pub mod allergen;
pub mod db;
pub mod health;
pub mod product;
pub mod reaction;
pub mod user;
