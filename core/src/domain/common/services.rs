use crate::domain::{
    allergen::ports::AllergenRepository, health::ports::HealthCheckRepository,
    product::ports::ProductRepository, reaction::ports::ReactionRepository,
    user::ports::UserRepository,
};

/// Aggregate holding one repository per concern. The per-domain service
/// traits are implemented on this struct in their own modules.
#[derive(Debug, Clone)]
pub struct Service<U, P, A, R, H>
where
    U: UserRepository,
    P: ProductRepository,
    A: AllergenRepository,
    R: ReactionRepository,
    H: HealthCheckRepository,
{
    pub(crate) user_repository: U,
    pub(crate) product_repository: P,
    pub(crate) allergen_repository: A,
    pub(crate) reaction_repository: R,
    pub(crate) health_check_repository: H,
}

impl<U, P, A, R, H> Service<U, P, A, R, H>
where
    U: UserRepository,
    P: ProductRepository,
    A: AllergenRepository,
    R: ReactionRepository,
    H: HealthCheckRepository,
{
    pub fn new(
        user_repository: U,
        product_repository: P,
        allergen_repository: A,
        reaction_repository: R,
        health_check_repository: H,
    ) -> Self {
        Self {
            user_repository,
            product_repository,
            allergen_repository,
            reaction_repository,
            health_check_repository,
        }
    }
}
