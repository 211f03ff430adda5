use uuid::Uuid;

use crate::domain::{
    allergen::{
        entities::Allergen,
        ports::{AllergenRepository, AllergenService},
        value_objects::{CreateAllergenInput, UpdateAllergenInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    product::ports::ProductRepository,
    reaction::ports::ReactionRepository,
    user::{ports::UserRepository, value_objects::Identity},
};

fn validate_present(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} can't be blank")));
    }
    Ok(())
}

// Editing an allergen does not touch reactions already derived for existing
// products; those refresh on the next save of each product.
impl<U, P, A, R, H> AllergenService for Service<U, P, A, R, H>
where
    U: UserRepository,
    P: ProductRepository,
    A: AllergenRepository,
    R: ReactionRepository,
    H: HealthCheckRepository,
{
    async fn create_allergen(
        &self,
        identity: Identity,
        input: CreateAllergenInput,
    ) -> Result<Allergen, CoreError> {
        validate_present(&input.name, "name")?;
        validate_present(&input.substances, "substances")?;

        let allergen = Allergen::new(identity.user_id(), input.name, input.substances);

        self.allergen_repository.create_allergen(allergen).await
    }

    async fn get_allergen(
        &self,
        identity: Identity,
        allergen_id: Uuid,
    ) -> Result<Allergen, CoreError> {
        self.allergen_repository
            .get_by_id(allergen_id, identity.user_id())
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_allergens(&self, identity: Identity) -> Result<Vec<Allergen>, CoreError> {
        self.allergen_repository.get_by_user(identity.user_id()).await
    }

    async fn update_allergen(
        &self,
        identity: Identity,
        input: UpdateAllergenInput,
    ) -> Result<Allergen, CoreError> {
        if let Some(ref name) = input.name {
            validate_present(name, "name")?;
        }
        if let Some(ref substances) = input.substances {
            validate_present(substances, "substances")?;
        }

        let mut allergen = self
            .allergen_repository
            .get_by_id(input.allergen_id, identity.user_id())
            .await?
            .ok_or(CoreError::NotFound)?;

        allergen.update(input.name, input.substances);

        self.allergen_repository.update_allergen(allergen).await
    }

    async fn delete_allergen(
        &self,
        identity: Identity,
        allergen_id: Uuid,
    ) -> Result<(), CoreError> {
        let user_id = identity.user_id();

        self.allergen_repository
            .get_by_id(allergen_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.allergen_repository
            .delete_allergen(allergen_id, user_id)
            .await
    }
}
