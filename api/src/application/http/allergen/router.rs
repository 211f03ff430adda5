use super::handlers::create_allergen::{__path_create_allergen, create_allergen};
use super::handlers::delete_allergen::{__path_delete_allergen, delete_allergen};
use super::handlers::get_allergen::{__path_get_allergen, get_allergen};
use super::handlers::get_allergens::{__path_get_allergens, get_allergens};
use super::handlers::update_allergen::{__path_update_allergen, update_allergen};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_allergens,
    get_allergen,
    create_allergen,
    update_allergen,
    delete_allergen
))]
pub struct AllergenApiDoc;

pub fn allergen_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/allergens", state.args.server.root_path),
            get(get_allergens),
        )
        .route(
            &format!("{}/allergens/{{allergen_id}}", state.args.server.root_path),
            get(get_allergen),
        )
        .route(
            &format!("{}/allergens", state.args.server.root_path),
            post(create_allergen),
        )
        .route(
            &format!("{}/allergens/{{allergen_id}}", state.args.server.root_path),
            put(update_allergen),
        )
        .route(
            &format!("{}/allergens/{{allergen_id}}", state.args.server.root_path),
            delete(delete_allergen),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
