pub mod get_reactive_products;
