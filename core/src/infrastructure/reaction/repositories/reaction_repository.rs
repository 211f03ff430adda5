use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect,
    TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        reaction::{entities::Reaction, ports::ReactionRepository},
    },
    entity::reactions::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresReactionRepository {
    pub db: DatabaseConnection,
}

impl PostgresReactionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReactionRepository for PostgresReactionRepository {
    async fn replace_for_product(
        &self,
        product_id: Uuid,
        user_id: Uuid,
        reactions: Vec<Reaction>,
    ) -> Result<Vec<Reaction>, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open reaction transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Entity::delete_many()
            .filter(Column::ProductId.eq(product_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete reactions: {}", e);
                CoreError::InternalServerError
            })?;

        if !reactions.is_empty() {
            let models: Vec<ActiveModel> = reactions
                .iter()
                .map(|reaction| ActiveModel {
                    id: Set(reaction.id),
                    product_id: Set(reaction.product_id),
                    allergen_id: Set(reaction.allergen_id),
                    user_id: Set(reaction.user_id),
                    reactive_ingredient: Set(reaction.reactive_ingredient.clone()),
                    reactive_substances: Set(reaction.reactive_substances.clone()),
                    created_at: Set(reaction.created_at.fixed_offset()),
                })
                .collect();

            Entity::insert_many(models).exec(&txn).await.map_err(|e| {
                error!("Failed to insert reactions: {}", e);
                CoreError::InternalServerError
            })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit reaction transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(reactions)
    }

    async fn get_by_product(&self, product_id: Uuid, user_id: Uuid) -> Result<Vec<Reaction>, CoreError> {
        let reactions = Entity::find()
            .filter(Column::ProductId.eq(product_id))
            .filter(Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get reactions: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(reactions.into_iter().map(Reaction::from).collect())
    }

    async fn get_reactive_product_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, CoreError> {
        let ids: Vec<Uuid> = Entity::find()
            .select_only()
            .column(Column::ProductId)
            .distinct()
            .filter(Column::UserId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get reactive product ids: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ids)
    }
}
