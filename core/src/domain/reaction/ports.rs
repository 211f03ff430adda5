use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, reaction::entities::Reaction,
    user::value_objects::Identity,
};

#[cfg_attr(test, mockall::automock)]
pub trait ReactionRepository: Send + Sync {
    /// Atomically replaces the stored reaction set for (product, owner):
    /// deletes every existing row for the pair and inserts `reactions`, in a
    /// single transaction.
    fn replace_for_product(
        &self,
        product_id: Uuid,
        user_id: Uuid,
        reactions: Vec<Reaction>,
    ) -> impl Future<Output = Result<Vec<Reaction>, CoreError>> + Send;

    fn get_by_product(
        &self,
        product_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Reaction>, CoreError>> + Send;

    fn get_reactive_product_ids(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Uuid>, CoreError>> + Send;
}

pub trait ReactionService: Send + Sync {
    /// Distinct ids of the caller's products with at least one stored
    /// reaction. Order is unspecified.
    fn get_reactive_products(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Uuid>, CoreError>> + Send;

    fn get_product_reactions(
        &self,
        identity: Identity,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Reaction>, CoreError>> + Send;
}
