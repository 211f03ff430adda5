use crate::domain::{
    allergen::ports::AllergenRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::{HealthCheckRepository, HealthCheckService},
    product::ports::ProductRepository,
    reaction::ports::ReactionRepository,
    user::ports::UserRepository,
};

impl<U, P, A, R, H> HealthCheckService for Service<U, P, A, R, H>
where
    U: UserRepository,
    P: ProductRepository,
    A: AllergenRepository,
    R: ReactionRepository,
    H: HealthCheckRepository,
{
    async fn health(&self) -> Result<(), CoreError> {
        self.health_check_repository.health().await
    }
}
