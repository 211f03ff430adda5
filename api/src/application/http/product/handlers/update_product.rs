use crate::application::auth::RequiredIdentity;
use crate::application::http::product::validators::UpdateProductValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantryguard_core::domain::product::entities::Product;
use pantryguard_core::domain::product::ports::ProductService;
use pantryguard_core::domain::product::value_objects::UpdateProductInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProductResponse {
    pub data: Product,
}

#[utoipa::path(
    put,
    path = "/{product_id}",
    tag = "product",
    summary = "Update product",
    description = "Updates a product owned by the current user and re-derives its allergen reactions.",
    responses(
        (status = 200, body = UpdateProductResponse)
    ),
    params(
        ("product_id" = Uuid, Path, description = "Product ID"),
    ),
    request_body = UpdateProductValidator
)]
pub async fn update_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateProductValidator>,
) -> Result<Response<UpdateProductResponse>, ApiError> {
    let product = state
        .service
        .update_product(
            identity,
            UpdateProductInput {
                product_id,
                name: payload.name,
                ingredients: payload.ingredients,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProductResponse { data: product }))
}
