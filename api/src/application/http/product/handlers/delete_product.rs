use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantryguard_core::domain::product::ports::ProductService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteProductResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{product_id}",
    tag = "product",
    summary = "Delete product",
    description = "Deletes a product owned by the current user along with its stored reactions.",
    responses(
        (status = 200, body = DeleteProductResponse)
    ),
    params(
        ("product_id" = Uuid, Path, description = "Product ID"),
    ),
)]
pub async fn delete_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteProductResponse>, ApiError> {
    state
        .service
        .delete_product(identity, product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteProductResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
