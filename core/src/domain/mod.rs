pub mod allergen;
pub mod common;
pub mod health;
pub mod product;
pub mod reaction;
pub mod user;
