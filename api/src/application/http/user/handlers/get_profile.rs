use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantryguard_core::domain::user::entities::User;
use pantryguard_core::domain::user::ports::UserService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileResponse {
    pub data: User,
}

#[utoipa::path(
    get,
    path = "",
    tag = "user",
    summary = "Get profile",
    description = "Retrieves the current user's profile.",
    responses(
        (status = 200, body = GetProfileResponse)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let user = state
        .service
        .get_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfileResponse { data: user }))
}
