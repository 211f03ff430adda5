use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantryguard_core::domain::allergen::entities::Allergen;
use pantryguard_core::domain::allergen::ports::AllergenService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAllergensResponse {
    pub data: Vec<Allergen>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "allergen",
    summary = "Get allergens",
    description = "Retrieves all allergen categories owned by the current user.",
    responses(
        (status = 200, body = GetAllergensResponse)
    ),
)]
pub async fn get_allergens(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetAllergensResponse>, ApiError> {
    let allergens = state
        .service
        .get_allergens(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAllergensResponse { data: allergens }))
}
