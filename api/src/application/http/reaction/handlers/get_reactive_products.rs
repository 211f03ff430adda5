use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantryguard_core::domain::reaction::ports::ReactionService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetReactiveProductsResponse {
    pub data: Vec<Uuid>,
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "reaction",
    summary = "Get reactive products",
    description = "Retrieves the ids of the current user's products that have at least one stored allergen reaction.",
    responses(
        (status = 200, body = GetReactiveProductsResponse)
    ),
)]
pub async fn get_reactive_products(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetReactiveProductsResponse>, ApiError> {
    let product_ids = state
        .service
        .get_reactive_products(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetReactiveProductsResponse {
        data: product_ids,
    }))
}
