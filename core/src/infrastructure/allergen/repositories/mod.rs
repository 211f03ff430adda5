pub mod allergen_repository;
