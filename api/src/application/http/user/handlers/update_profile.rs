use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::UpdateProfileValidator;
use axum::extract::State;
use pantryguard_core::domain::user::entities::User;
use pantryguard_core::domain::user::ports::UserService;
use pantryguard_core::domain::user::value_objects::UpdateProfileInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProfileResponse {
    pub data: User,
}

#[utoipa::path(
    put,
    path = "",
    tag = "user",
    summary = "Update profile",
    description = "Updates the current user's profile fields.",
    responses(
        (status = 200, body = UpdateProfileResponse)
    ),
    request_body = UpdateProfileValidator
)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    let user = state
        .service
        .update_profile(
            identity,
            UpdateProfileInput {
                first_name: payload.first_name,
                last_name: payload.last_name,
                address: payload.address,
                phone: payload.phone,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfileResponse { data: user }))
}
