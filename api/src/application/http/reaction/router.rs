use super::handlers::get_reactive_products::{__path_get_reactive_products, get_reactive_products};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_reactive_products))]
pub struct ReactionApiDoc;

pub fn reaction_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/reactions/products", state.args.server.root_path),
            get(get_reactive_products),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
