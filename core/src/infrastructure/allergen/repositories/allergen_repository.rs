use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        allergen::{entities::Allergen, ports::AllergenRepository},
        common::entities::app_errors::CoreError,
    },
    entity::allergens::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresAllergenRepository {
    pub db: DatabaseConnection,
}

impl PostgresAllergenRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(allergen: &Allergen) -> ActiveModel {
    ActiveModel {
        id: Set(allergen.id),
        user_id: Set(allergen.user_id),
        name: Set(allergen.name.clone()),
        substances: Set(allergen.substances.clone()),
        created_at: Set(allergen.created_at.fixed_offset()),
        updated_at: Set(allergen.updated_at.fixed_offset()),
    }
}

impl AllergenRepository for PostgresAllergenRepository {
    async fn create_allergen(&self, allergen: Allergen) -> Result<Allergen, CoreError> {
        let created = Entity::insert(to_active_model(&allergen))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create allergen: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Allergen::from(created))
    }

    async fn get_by_id(&self, allergen_id: Uuid, user_id: Uuid) -> Result<Option<Allergen>, CoreError> {
        let allergen = Entity::find()
            .filter(Column::Id.eq(allergen_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get allergen: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(allergen.map(Allergen::from))
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Allergen>, CoreError> {
        let allergens = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get allergens: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(allergens.into_iter().map(Allergen::from).collect())
    }

    async fn find_by_substance_fragment(
        &self,
        user_id: Uuid,
        fragment: &str,
    ) -> Result<Vec<Allergen>, CoreError> {
        let allergens = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Expr::col(Column::Substances).ilike(format!("%{}%", fragment)))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search allergens by substance: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(allergens.into_iter().map(Allergen::from).collect())
    }

    async fn update_allergen(&self, allergen: Allergen) -> Result<Allergen, CoreError> {
        let updated = Entity::update(to_active_model(&allergen))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update allergen: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Allergen::from(updated))
    }

    async fn delete_allergen(&self, allergen_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(allergen_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete allergen: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
