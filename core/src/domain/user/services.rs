use crate::domain::{
    allergen::ports::AllergenRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    product::ports::ProductRepository,
    reaction::ports::ReactionRepository,
    user::{
        entities::User,
        ports::{UserRepository, UserService},
        value_objects::{Identity, UpdateProfileInput},
    },
};

fn ensure_present(value: &Option<String>, field: &str) -> Result<(), CoreError> {
    if let Some(v) = value
        && v.trim().is_empty()
    {
        return Err(CoreError::Validation(format!("{field} can't be blank")));
    }
    Ok(())
}

impl<U, P, A, R, H> UserService for Service<U, P, A, R, H>
where
    U: UserRepository,
    P: ProductRepository,
    A: AllergenRepository,
    R: ReactionRepository,
    H: HealthCheckRepository,
{
    async fn get_profile(&self, identity: Identity) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(identity.user_id())
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_profile(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> Result<User, CoreError> {
        ensure_present(&input.first_name, "first_name")?;
        ensure_present(&input.last_name, "last_name")?;
        ensure_present(&input.address, "address")?;
        ensure_present(&input.phone, "phone")?;

        let mut user = self
            .user_repository
            .get_by_id(identity.user_id())
            .await?
            .ok_or(CoreError::NotFound)?;

        user.update_profile(input.first_name, input.last_name, input.address, input.phone);

        self.user_repository.update_user(user).await
    }
}
