pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod get_product_reactions;
pub mod get_products;
pub mod update_product;
