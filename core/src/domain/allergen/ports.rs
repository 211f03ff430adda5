use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    allergen::{
        entities::Allergen,
        value_objects::{CreateAllergenInput, UpdateAllergenInput},
    },
    common::entities::app_errors::CoreError,
    user::value_objects::Identity,
};

#[cfg_attr(test, mockall::automock)]
pub trait AllergenRepository: Send + Sync {
    fn create_allergen(
        &self,
        allergen: Allergen,
    ) -> impl Future<Output = Result<Allergen, CoreError>> + Send;

    fn get_by_id(
        &self,
        allergen_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Allergen>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Allergen>, CoreError>> + Send;

    /// Coarse candidate lookup: the owner's allergens whose substances text
    /// contains `fragment` as a case-insensitive substring (`ILIKE`).
    fn find_by_substance_fragment(
        &self,
        user_id: Uuid,
        fragment: &str,
    ) -> impl Future<Output = Result<Vec<Allergen>, CoreError>> + Send;

    fn update_allergen(
        &self,
        allergen: Allergen,
    ) -> impl Future<Output = Result<Allergen, CoreError>> + Send;

    fn delete_allergen(
        &self,
        allergen_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait AllergenService: Send + Sync {
    fn create_allergen(
        &self,
        identity: Identity,
        input: CreateAllergenInput,
    ) -> impl Future<Output = Result<Allergen, CoreError>> + Send;

    fn get_allergen(
        &self,
        identity: Identity,
        allergen_id: Uuid,
    ) -> impl Future<Output = Result<Allergen, CoreError>> + Send;

    fn get_allergens(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Allergen>, CoreError>> + Send;

    fn update_allergen(
        &self,
        identity: Identity,
        input: UpdateAllergenInput,
    ) -> impl Future<Output = Result<Allergen, CoreError>> + Send;

    fn delete_allergen(
        &self,
        identity: Identity,
        allergen_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
