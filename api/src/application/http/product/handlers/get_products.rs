use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantryguard_core::domain::product::entities::Product;
use pantryguard_core::domain::product::ports::ProductService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProductsResponse {
    pub data: Vec<Product>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "product",
    summary = "Get products",
    description = "Retrieves all products owned by the current user.",
    responses(
        (status = 200, body = GetProductsResponse)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetProductsResponse>, ApiError> {
    let products = state
        .service
        .get_products(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProductsResponse { data: products }))
}
