use uuid::Uuid;

use crate::domain::{
    allergen::ports::AllergenRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    product::{
        entities::Product,
        ports::{ProductRepository, ProductService},
        value_objects::{CreateProductInput, UpdateProductInput},
    },
    reaction::{ports::ReactionRepository, services::derive_reactions},
    user::{ports::UserRepository, value_objects::Identity},
};

impl<U, P, A, R, H> ProductService for Service<U, P, A, R, H>
where
    U: UserRepository,
    P: ProductRepository,
    A: AllergenRepository,
    R: ReactionRepository,
    H: HealthCheckRepository,
{
    async fn create_product(
        &self,
        identity: Identity,
        input: CreateProductInput,
    ) -> Result<Product, CoreError> {
        let user_id = identity.user_id();

        Product::validate_name(&input.name)?;
        Product::validate_ingredients(&input.ingredients)?;

        if self
            .product_repository
            .get_by_name(user_id, &input.name)
            .await?
            .is_some()
        {
            return Err(CoreError::NameTaken);
        }

        let product = Product::new(user_id, input.name, input.ingredients);
        let product = self.product_repository.create_product(product).await?;

        // Post-persist hook: reactions must be current before the save
        // returns to the caller.
        derive_reactions(
            &self.allergen_repository,
            &self.reaction_repository,
            &product,
        )
        .await?;

        Ok(product)
    }

    async fn get_product(
        &self,
        identity: Identity,
        product_id: Uuid,
    ) -> Result<Product, CoreError> {
        self.product_repository
            .get_by_id(product_id, identity.user_id())
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_products(&self, identity: Identity) -> Result<Vec<Product>, CoreError> {
        self.product_repository.get_by_user(identity.user_id()).await
    }

    async fn update_product(
        &self,
        identity: Identity,
        input: UpdateProductInput,
    ) -> Result<Product, CoreError> {
        let user_id = identity.user_id();

        let mut product = self
            .product_repository
            .get_by_id(input.product_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(ref name) = input.name {
            Product::validate_name(name)?;
            if let Some(existing) = self.product_repository.get_by_name(user_id, name).await?
                && existing.id != product.id
            {
                return Err(CoreError::NameTaken);
            }
        }
        if let Some(ref ingredients) = input.ingredients {
            Product::validate_ingredients(ingredients)?;
        }

        product.update(input.name, input.ingredients);
        let product = self.product_repository.update_product(product).await?;

        derive_reactions(
            &self.allergen_repository,
            &self.reaction_repository,
            &product,
        )
        .await?;

        Ok(product)
    }

    async fn delete_product(
        &self,
        identity: Identity,
        product_id: Uuid,
    ) -> Result<(), CoreError> {
        let user_id = identity.user_id();

        self.product_repository
            .get_by_id(product_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.product_repository
            .delete_product(product_id, user_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        allergen::{ports::AllergenService, value_objects::CreateAllergenInput},
        common::test_support::{fixture_service, test_identity},
        reaction::ports::ReactionService,
    };

    async fn seed_dairy_allergen<S: AllergenService>(service: &S, identity: Identity) {
        service
            .create_allergen(
                identity,
                CreateAllergenInput {
                    name: "Dairy".to_string(),
                    substances: "Casein, Whey, Milk Protein".to_string(),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_product_records_matching_substances_only() {
        let (service, state) = fixture_service();
        let identity = test_identity(&state);
        seed_dairy_allergen(&service, identity.clone()).await;

        let product = service
            .create_product(
                identity,
                CreateProductInput {
                    name: "Oat Drink".to_string(),
                    ingredients: "Milk, Water".to_string(),
                },
            )
            .await
            .unwrap();

        let reactions = state.reactions.lock().unwrap();
        assert_eq!(reactions.len(), 1);
        assert_eq!(reactions[0].product_id, product.id);
        assert_eq!(reactions[0].user_id, product.user_id);
        assert_eq!(reactions[0].reactive_ingredient, "MILK");
        assert_eq!(reactions[0].reactive_substances, "Milk Protein");
    }

    #[tokio::test]
    async fn test_short_name_fails_before_derivation() {
        let (service, state) = fixture_service();
        let identity = test_identity(&state);
        seed_dairy_allergen(&service, identity.clone()).await;

        let err = service
            .create_product(
                identity,
                CreateProductInput {
                    name: "ab".to_string(),
                    ingredients: "Milk".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        assert!(state.products.lock().unwrap().is_empty());
        assert!(state.reactions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_semicolon_ingredients_fail_before_derivation() {
        let (service, state) = fixture_service();
        let identity = test_identity(&state);

        let err = service
            .create_product(
                identity,
                CreateProductInput {
                    name: "Cheese".to_string(),
                    ingredients: "Milk; Salt".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        assert!(state.products.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_name_is_case_insensitive_per_owner() {
        let (service, state) = fixture_service();
        let identity = test_identity(&state);

        service
            .create_product(
                identity.clone(),
                CreateProductInput {
                    name: "Granola".to_string(),
                    ingredients: "Oats".to_string(),
                },
            )
            .await
            .unwrap();

        let err = service
            .create_product(
                identity,
                CreateProductInput {
                    name: "GRANOLA".to_string(),
                    ingredients: "Oats, Honey".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NameTaken);
    }

    #[tokio::test]
    async fn test_update_narrowing_ingredients_drops_stale_reactions() {
        let (service, state) = fixture_service();
        let identity = test_identity(&state);
        seed_dairy_allergen(&service, identity.clone()).await;

        let product = service
            .create_product(
                identity.clone(),
                CreateProductInput {
                    name: "Latte".to_string(),
                    ingredients: "Milk, Whey, Water".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(state.reactions.lock().unwrap().len(), 2);

        service
            .update_product(
                identity,
                UpdateProductInput {
                    product_id: product.id,
                    name: None,
                    ingredients: Some("Water".to_string()),
                },
            )
            .await
            .unwrap();

        assert!(state.reactions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resaving_unchanged_ingredients_converges() {
        let (service, state) = fixture_service();
        let identity = test_identity(&state);
        seed_dairy_allergen(&service, identity.clone()).await;

        let product = service
            .create_product(
                identity.clone(),
                CreateProductInput {
                    name: "Latte".to_string(),
                    ingredients: "Milk, Water".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(state.reactions.lock().unwrap().len(), 1);

        service
            .update_product(
                identity,
                UpdateProductInput {
                    product_id: product.id,
                    name: None,
                    ingredients: Some("Milk, Water".to_string()),
                },
            )
            .await
            .unwrap();

        // Delete-then-recreate converges rather than accumulating rows.
        assert_eq!(state.reactions.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_allergens_of_other_users_never_match() {
        let (service, state) = fixture_service();
        let owner = test_identity(&state);
        let other = state.add_user("other@example.com");
        seed_dairy_allergen(&service, other).await;

        service
            .create_product(
                owner,
                CreateProductInput {
                    name: "Latte".to_string(),
                    ingredients: "Milk, Water".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(state.reactions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reactive_product_listing_collapses_duplicates() {
        let (service, state) = fixture_service();
        let identity = test_identity(&state);
        seed_dairy_allergen(&service, identity.clone()).await;

        let p1 = service
            .create_product(
                identity.clone(),
                CreateProductInput {
                    name: "Latte".to_string(),
                    // Repeated ingredient: two reaction rows for one product.
                    ingredients: "Milk, Milk".to_string(),
                },
            )
            .await
            .unwrap();
        service
            .create_product(
                identity.clone(),
                CreateProductInput {
                    name: "Water Bottle".to_string(),
                    ingredients: "Water".to_string(),
                },
            )
            .await
            .unwrap();
        let p3 = service
            .create_product(
                identity.clone(),
                CreateProductInput {
                    name: "Whey Shake".to_string(),
                    ingredients: "Whey, Water".to_string(),
                },
            )
            .await
            .unwrap();

        let mut ids = service.get_reactive_products(identity).await.unwrap();
        ids.sort();
        let mut expected = vec![p1.id, p3.id];
        expected.sort();
        assert_eq!(ids, expected);
    }
}
