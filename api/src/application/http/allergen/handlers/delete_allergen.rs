use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantryguard_core::domain::allergen::ports::AllergenService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteAllergenResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{allergen_id}",
    tag = "allergen",
    summary = "Delete allergen",
    description = "Deletes an allergen category owned by the current user along with its stored reactions.",
    responses(
        (status = 200, body = DeleteAllergenResponse)
    ),
    params(
        ("allergen_id" = Uuid, Path, description = "Allergen ID"),
    ),
)]
pub async fn delete_allergen(
    Path(allergen_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteAllergenResponse>, ApiError> {
    state
        .service
        .delete_allergen(identity, allergen_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteAllergenResponse {
        message: "Allergen deleted successfully".to_string(),
    }))
}
