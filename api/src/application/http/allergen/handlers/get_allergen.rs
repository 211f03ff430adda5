use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantryguard_core::domain::allergen::entities::Allergen;
use pantryguard_core::domain::allergen::ports::AllergenService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAllergenResponse {
    pub data: Allergen,
}

#[utoipa::path(
    get,
    path = "/{allergen_id}",
    tag = "allergen",
    summary = "Get allergen",
    description = "Retrieves a single allergen category owned by the current user.",
    responses(
        (status = 200, body = GetAllergenResponse)
    ),
    params(
        ("allergen_id" = Uuid, Path, description = "Allergen ID"),
    ),
)]
pub async fn get_allergen(
    Path(allergen_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetAllergenResponse>, ApiError> {
    let allergen = state
        .service
        .get_allergen(identity, allergen_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAllergenResponse { data: allergen }))
}
