//! In-memory implementations of the repository ports for service tests.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::domain::{
    allergen::{entities::Allergen, ports::AllergenRepository},
    common::{entities::app_errors::CoreError, generate_timestamp, services::Service},
    health::ports::HealthCheckRepository,
    product::{entities::Product, ports::ProductRepository},
    reaction::{entities::Reaction, ports::ReactionRepository},
    user::{entities::User, ports::UserRepository, value_objects::Identity},
};

#[derive(Default, Clone)]
pub struct FixtureState {
    pub users: Arc<Mutex<Vec<User>>>,
    pub products: Arc<Mutex<Vec<Product>>>,
    pub allergens: Arc<Mutex<Vec<Allergen>>>,
    pub reactions: Arc<Mutex<Vec<Reaction>>>,
}

impl FixtureState {
    pub fn add_user(&self, email: &str) -> Identity {
        let (now, _) = generate_timestamp();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            address: "1 Main St".to_string(),
            phone: "555-0100".to_string(),
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().push(user.clone());
        Identity::User(user)
    }
}

pub type FixtureService = Service<
    FakeUserRepository,
    FakeProductRepository,
    FakeAllergenRepository,
    FakeReactionRepository,
    FakeHealthCheckRepository,
>;

pub fn fixture_service() -> (FixtureService, FixtureState) {
    let state = FixtureState::default();
    let service = Service::new(
        FakeUserRepository {
            users: state.users.clone(),
        },
        FakeProductRepository {
            products: state.products.clone(),
        },
        FakeAllergenRepository {
            allergens: state.allergens.clone(),
        },
        FakeReactionRepository {
            reactions: state.reactions.clone(),
        },
        FakeHealthCheckRepository,
    );
    (service, state)
}

pub fn test_identity(state: &FixtureState) -> Identity {
    state.add_user("owner@example.com")
}

#[derive(Default, Clone)]
pub struct FakeUserRepository {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl UserRepository for FakeUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        let mut users = self.users.lock().unwrap();
        if let Some(slot) = users.iter_mut().find(|u| u.id == user.id) {
            *slot = user.clone();
        }
        Ok(user)
    }
}

#[derive(Default, Clone)]
pub struct FakeProductRepository {
    pub products: Arc<Mutex<Vec<Product>>>,
}

impl ProductRepository for FakeProductRepository {
    async fn create_product(&self, product: Product) -> Result<Product, CoreError> {
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn get_by_id(&self, product_id: Uuid, user_id: Uuid) -> Result<Option<Product>, CoreError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == product_id && p.user_id == user_id)
            .cloned())
    }

    async fn get_by_name(&self, user_id: Uuid, name: &str) -> Result<Option<Product>, CoreError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id && p.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Product>, CoreError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_product(&self, product: Product) -> Result<Product, CoreError> {
        let mut products = self.products.lock().unwrap();
        if let Some(slot) = products.iter_mut().find(|p| p.id == product.id) {
            *slot = product.clone();
        }
        Ok(product)
    }

    async fn delete_product(&self, product_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        self.products
            .lock()
            .unwrap()
            .retain(|p| !(p.id == product_id && p.user_id == user_id));
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct FakeAllergenRepository {
    pub allergens: Arc<Mutex<Vec<Allergen>>>,
}

impl FakeAllergenRepository {
    pub fn insert(&self, allergen: Allergen) {
        self.allergens.lock().unwrap().push(allergen);
    }
}

impl AllergenRepository for FakeAllergenRepository {
    async fn create_allergen(&self, allergen: Allergen) -> Result<Allergen, CoreError> {
        self.insert(allergen.clone());
        Ok(allergen)
    }

    async fn get_by_id(&self, allergen_id: Uuid, user_id: Uuid) -> Result<Option<Allergen>, CoreError> {
        Ok(self
            .allergens
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == allergen_id && a.user_id == user_id)
            .cloned())
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Allergen>, CoreError> {
        Ok(self
            .allergens
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_substance_fragment(
        &self,
        user_id: Uuid,
        fragment: &str,
    ) -> Result<Vec<Allergen>, CoreError> {
        let needle = fragment.to_uppercase();
        Ok(self
            .allergens
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id && a.substances.to_uppercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn update_allergen(&self, allergen: Allergen) -> Result<Allergen, CoreError> {
        let mut allergens = self.allergens.lock().unwrap();
        if let Some(slot) = allergens.iter_mut().find(|a| a.id == allergen.id) {
            *slot = allergen.clone();
        }
        Ok(allergen)
    }

    async fn delete_allergen(&self, allergen_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        self.allergens
            .lock()
            .unwrap()
            .retain(|a| !(a.id == allergen_id && a.user_id == user_id));
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct FakeReactionRepository {
    pub reactions: Arc<Mutex<Vec<Reaction>>>,
}

impl FakeReactionRepository {
    pub fn insert(&self, reaction: Reaction) {
        self.reactions.lock().unwrap().push(reaction);
    }

    pub fn rows(&self) -> Vec<Reaction> {
        self.reactions.lock().unwrap().clone()
    }
}

impl ReactionRepository for FakeReactionRepository {
    async fn replace_for_product(
        &self,
        product_id: Uuid,
        user_id: Uuid,
        reactions: Vec<Reaction>,
    ) -> Result<Vec<Reaction>, CoreError> {
        let mut rows = self.reactions.lock().unwrap();
        rows.retain(|r| !(r.product_id == product_id && r.user_id == user_id));
        rows.extend(reactions.iter().cloned());
        Ok(reactions)
    }

    async fn get_by_product(&self, product_id: Uuid, user_id: Uuid) -> Result<Vec<Reaction>, CoreError> {
        Ok(self
            .reactions
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.product_id == product_id && r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_reactive_product_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, CoreError> {
        // Unlike the Postgres implementation this does not collapse
        // duplicates, which lets tests cover the service-side dedup.
        Ok(self
            .reactions
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| r.product_id)
            .collect())
    }
}

#[derive(Default, Clone)]
pub struct FakeHealthCheckRepository;

impl HealthCheckRepository for FakeHealthCheckRepository {
    async fn health(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
