use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    allergen::ports::AllergenRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    product::{entities::Product, ports::ProductRepository},
    reaction::{
        entities::{Reaction, ReactionConfig},
        helpers::{matching_substances, tokenize_ingredients},
        ports::{ReactionRepository, ReactionService},
    },
    user::{ports::UserRepository, value_objects::Identity},
};

/// Recomputes the reaction set for a freshly persisted product and makes
/// storage reflect exactly that set.
///
/// For every ingredient token the owner's allergens are narrowed by a coarse
/// substring query; within each candidate, `matching_substances` decides
/// which substance tokens actually count. A single ingredient can implicate
/// several categories and a category can be implicated by several
/// ingredients, so no deduplication happens across pairs.
pub async fn derive_reactions<A, R>(
    allergen_repository: &A,
    reaction_repository: &R,
    product: &Product,
) -> Result<Vec<Reaction>, CoreError>
where
    A: AllergenRepository,
    R: ReactionRepository,
{
    let mut reactions = Vec::new();

    for ingredient in tokenize_ingredients(&product.ingredients) {
        let candidates = allergen_repository
            .find_by_substance_fragment(product.user_id, &ingredient)
            .await?;

        for allergen in candidates {
            let reactive_substances =
                matching_substances(&allergen.substances, &ingredient).join(";");
            if reactive_substances.is_empty() {
                // Coarse match only; no individual substance token survived.
                continue;
            }

            reactions.push(Reaction::new(ReactionConfig {
                product_id: product.id,
                allergen_id: allergen.id,
                user_id: product.user_id,
                reactive_ingredient: ingredient.to_uppercase(),
                reactive_substances,
            }));
        }
    }

    debug!(
        product_id = %product.id,
        count = reactions.len(),
        "derived reactions for product"
    );

    reaction_repository
        .replace_for_product(product.id, product.user_id, reactions)
        .await
}

impl<U, P, A, R, H> ReactionService for Service<U, P, A, R, H>
where
    U: UserRepository,
    P: ProductRepository,
    A: AllergenRepository,
    R: ReactionRepository,
    H: HealthCheckRepository,
{
    async fn get_reactive_products(&self, identity: Identity) -> Result<Vec<Uuid>, CoreError> {
        let mut ids = self
            .reaction_repository
            .get_reactive_product_ids(identity.user_id())
            .await?;

        let mut seen = HashSet::new();
        ids.retain(|id| seen.insert(*id));

        Ok(ids)
    }

    async fn get_product_reactions(
        &self,
        identity: Identity,
        product_id: Uuid,
    ) -> Result<Vec<Reaction>, CoreError> {
        let user_id = identity.user_id();

        self.product_repository
            .get_by_id(product_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.reaction_repository
            .get_by_product(product_id, user_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        allergen::entities::Allergen,
        common::test_support::{FakeAllergenRepository, FakeReactionRepository},
    };

    fn product(user_id: Uuid, ingredients: &str) -> Product {
        Product::new(user_id, "Test Product".to_string(), ingredients.to_string())
    }

    #[tokio::test]
    async fn test_one_ingredient_can_hit_multiple_categories() {
        let user_id = Uuid::new_v4();
        let allergens = FakeAllergenRepository::default();
        allergens.insert(Allergen::new(
            user_id,
            "Dairy".to_string(),
            "Milk Protein, Casein".to_string(),
        ));
        allergens.insert(Allergen::new(
            user_id,
            "Lactose".to_string(),
            "Milk Sugar".to_string(),
        ));
        let reactions = FakeReactionRepository::default();

        let derived = derive_reactions(&allergens, &reactions, &product(user_id, "Milk, Water"))
            .await
            .unwrap();

        assert_eq!(derived.len(), 2);
        let substances: Vec<_> = derived.iter().map(|r| r.reactive_substances.as_str()).collect();
        assert!(substances.contains(&"Milk Protein"));
        assert!(substances.contains(&"Milk Sugar"));
        assert!(derived.iter().all(|r| r.reactive_ingredient == "MILK"));
    }

    #[tokio::test]
    async fn test_coarse_match_without_fine_match_yields_no_row() {
        let user_id = Uuid::new_v4();
        let allergens = FakeAllergenRepository::default();
        allergens.insert(Allergen::new(
            user_id,
            "Soy".to_string(),
            "Soy, Nut Oil".to_string(),
        ));
        let reactions = FakeReactionRepository::default();

        // "Soy,, Nut Oil" tokenizes to ["Soy,", "Nut Oil"]. "Soy," appears
        // in the substances text only across the ", " separator, so the
        // coarse query selects the category but no single substance token
        // keeps the pair.
        let derived = derive_reactions(&allergens, &reactions, &product(user_id, "Soy,, Nut Oil"))
            .await
            .unwrap();

        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].reactive_ingredient, "NUT OIL");
        assert_eq!(derived[0].reactive_substances, "Nut Oil");
    }

    #[tokio::test]
    async fn test_zero_allergens_is_a_noop_after_replace() {
        let user_id = Uuid::new_v4();
        let allergens = FakeAllergenRepository::default();
        let reactions = FakeReactionRepository::default();
        // Pre-existing rows for the product must be wiped even when nothing
        // matches any more.
        let p = product(user_id, "Milk, Water");
        reactions.insert(Reaction::new(ReactionConfig {
            product_id: p.id,
            allergen_id: Uuid::new_v4(),
            user_id,
            reactive_ingredient: "MILK".to_string(),
            reactive_substances: "Milk".to_string(),
        }));

        let derived = derive_reactions(&allergens, &reactions, &p).await.unwrap();

        assert!(derived.is_empty());
        assert!(reactions.rows().is_empty());
    }

    #[tokio::test]
    async fn test_trailing_separator_never_matches_unrelated_allergens() {
        let user_id = Uuid::new_v4();
        let allergens = FakeAllergenRepository::default();
        allergens.insert(Allergen::new(
            user_id,
            "Nuts".to_string(),
            "Peanut, Almond".to_string(),
        ));
        let reactions = FakeReactionRepository::default();

        // A trailing ", " must not leave an empty token behind; an empty
        // token would substring-match every category.
        let derived = derive_reactions(&allergens, &reactions, &product(user_id, "Oats, "))
            .await
            .unwrap();

        assert!(derived.is_empty());
        assert!(reactions.rows().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_ingredient_produces_duplicate_rows() {
        let user_id = Uuid::new_v4();
        let allergens = FakeAllergenRepository::default();
        allergens.insert(Allergen::new(
            user_id,
            "Dairy".to_string(),
            "Milk Protein".to_string(),
        ));
        let reactions = FakeReactionRepository::default();

        let derived = derive_reactions(&allergens, &reactions, &product(user_id, "Milk, Milk"))
            .await
            .unwrap();

        assert_eq!(derived.len(), 2);
    }
}
