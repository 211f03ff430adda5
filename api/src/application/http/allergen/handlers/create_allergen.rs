use crate::application::auth::RequiredIdentity;
use crate::application::http::allergen::validators::CreateAllergenValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantryguard_core::domain::allergen::entities::Allergen;
use pantryguard_core::domain::allergen::ports::AllergenService;
use pantryguard_core::domain::allergen::value_objects::CreateAllergenInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateAllergenResponse {
    pub data: Allergen,
}

#[utoipa::path(
    post,
    path = "",
    tag = "allergen",
    summary = "Create allergen",
    description = "Creates a new allergen category for the current user.",
    responses(
        (status = 201, body = CreateAllergenResponse)
    ),
    request_body = CreateAllergenValidator
)]
pub async fn create_allergen(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateAllergenValidator>,
) -> Result<Response<CreateAllergenResponse>, ApiError> {
    let allergen = state
        .service
        .create_allergen(
            identity,
            CreateAllergenInput {
                name: payload.name,
                substances: payload.substances,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateAllergenResponse { data: allergen }))
}
