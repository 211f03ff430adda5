use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, Func},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        product::{entities::Product, ports::ProductRepository},
    },
    entity::products::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(product: &Product) -> ActiveModel {
    ActiveModel {
        id: Set(product.id),
        user_id: Set(product.user_id),
        name: Set(product.name.clone()),
        ingredients: Set(product.ingredients.clone()),
        created_at: Set(product.created_at.fixed_offset()),
        updated_at: Set(product.updated_at.fixed_offset()),
    }
}

impl ProductRepository for PostgresProductRepository {
    async fn create_product(&self, product: Product) -> Result<Product, CoreError> {
        let created = Entity::insert(to_active_model(&product))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Product::from(created))
    }

    async fn get_by_id(&self, product_id: Uuid, user_id: Uuid) -> Result<Option<Product>, CoreError> {
        let product = Entity::find()
            .filter(Column::Id.eq(product_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(product.map(Product::from))
    }

    async fn get_by_name(&self, user_id: Uuid, name: &str) -> Result<Option<Product>, CoreError> {
        let product = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(
                Expr::expr(Func::lower(Expr::col(Column::Name))).eq(name.to_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product by name: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(product.map(Product::from))
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Product>, CoreError> {
        let products = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get products: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(products.into_iter().map(Product::from).collect())
    }

    async fn update_product(&self, product: Product) -> Result<Product, CoreError> {
        let updated = Entity::update(to_active_model(&product))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Product::from(updated))
    }

    async fn delete_product(&self, product_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(product_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
