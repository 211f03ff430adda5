pub mod allergen;
pub mod health;
pub mod product;
pub mod reaction;
pub mod server;
pub mod user;

use crate::application::http::{
    allergen::router::AllergenApiDoc, product::router::ProductApiDoc,
    reaction::router::ReactionApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pantryguard API"
    ),
    nest(
        (path = "/products", api = ProductApiDoc),
        (path = "/allergens", api = AllergenApiDoc),
        (path = "/reactions", api = ReactionApiDoc),
        (path = "/profile", api = UserApiDoc),
    )
)]
pub struct ApiDoc;
