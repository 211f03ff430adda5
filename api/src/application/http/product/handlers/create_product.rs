use crate::application::auth::RequiredIdentity;
use crate::application::http::product::validators::CreateProductValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantryguard_core::domain::product::entities::Product;
use pantryguard_core::domain::product::ports::ProductService;
use pantryguard_core::domain::product::value_objects::CreateProductInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateProductResponse {
    pub data: Product,
}

#[utoipa::path(
    post,
    path = "",
    tag = "product",
    summary = "Create product",
    description = "Creates a new product for the current user and derives its allergen reactions before responding.",
    responses(
        (status = 201, body = CreateProductResponse)
    ),
    request_body = CreateProductValidator
)]
pub async fn create_product(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateProductValidator>,
) -> Result<Response<CreateProductResponse>, ApiError> {
    let product = state
        .service
        .create_product(
            identity,
            CreateProductInput {
                name: payload.name,
                ingredients: payload.ingredients,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateProductResponse { data: product }))
}
