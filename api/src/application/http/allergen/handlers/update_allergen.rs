use crate::application::auth::RequiredIdentity;
use crate::application::http::allergen::validators::UpdateAllergenValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantryguard_core::domain::allergen::entities::Allergen;
use pantryguard_core::domain::allergen::ports::AllergenService;
use pantryguard_core::domain::allergen::value_objects::UpdateAllergenInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateAllergenResponse {
    pub data: Allergen,
}

#[utoipa::path(
    put,
    path = "/{allergen_id}",
    tag = "allergen",
    summary = "Update allergen",
    description = "Updates an allergen category owned by the current user. Stored reactions are not re-derived.",
    responses(
        (status = 200, body = UpdateAllergenResponse)
    ),
    params(
        ("allergen_id" = Uuid, Path, description = "Allergen ID"),
    ),
    request_body = UpdateAllergenValidator
)]
pub async fn update_allergen(
    Path(allergen_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateAllergenValidator>,
) -> Result<Response<UpdateAllergenResponse>, ApiError> {
    let allergen = state
        .service
        .update_allergen(
            identity,
            UpdateAllergenInput {
                allergen_id,
                name: payload.name,
                substances: payload.substances,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateAllergenResponse { data: allergen }))
}
