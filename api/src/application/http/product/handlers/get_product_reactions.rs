use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantryguard_core::domain::reaction::entities::Reaction;
use pantryguard_core::domain::reaction::ports::ReactionService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProductReactionsResponse {
    pub data: Vec<Reaction>,
}

#[utoipa::path(
    get,
    path = "/{product_id}/reactions",
    tag = "product",
    summary = "Get product reactions",
    description = "Retrieves the stored allergen reactions for a product owned by the current user.",
    responses(
        (status = 200, body = GetProductReactionsResponse)
    ),
    params(
        ("product_id" = Uuid, Path, description = "Product ID"),
    ),
)]
pub async fn get_product_reactions(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetProductReactionsResponse>, ApiError> {
    let reactions = state
        .service
        .get_product_reactions(identity, product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProductReactionsResponse { data: reactions }))
}
