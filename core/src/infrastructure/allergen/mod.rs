pub mod mappers;
pub mod repositories;

pub use repositories::allergen_repository::PostgresAllergenRepository;
