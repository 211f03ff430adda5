use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{
        entities::Product,
        value_objects::{CreateProductInput, UpdateProductInput},
    },
    user::value_objects::Identity,
};

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    fn create_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn get_by_id(
        &self,
        product_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    /// Case-insensitive lookup by name within one owner's catalog.
    fn get_by_name(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn update_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete_product(
        &self,
        product_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait ProductService: Send + Sync {
    fn create_product(
        &self,
        identity: Identity,
        input: CreateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn get_product(
        &self,
        identity: Identity,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn get_products(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn update_product(
        &self,
        identity: Identity,
        input: UpdateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete_product(
        &self,
        identity: Identity,
        product_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
