use axum::{
    RequestExt,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use pantryguard_core::domain::user::{ports::UserRepository, value_objects::Identity};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,
    pub exp: usize,
}

/// Resolves the bearer token to an `Identity` and stores it in the request
/// extensions. Requests without a valid token pass through without one;
/// `RequiredIdentity` rejects them at extraction time.
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Ok(TypedHeader(Authorization(bearer))) = req
        .extract_parts::<TypedHeader<Authorization<Bearer>>>()
        .await
    {
        let key = DecodingKey::from_secret(state.args.auth.jwt_secret.as_bytes());
        if let Ok(data) =
            decode::<JwtClaims>(bearer.token(), &key, &Validation::new(Algorithm::HS256))
            && let Ok(Some(user)) = state.user_repository.get_by_id(data.claims.sub).await
        {
            req.extensions_mut().insert(Identity::User(user));
        }
    }

    Ok(next.run(req).await)
}

/// Extractor for handlers that require an authenticated caller.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| {
                ApiError::Unauthorized("Authentication required: provide a bearer token".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantryguard_core::domain::{common::generate_timestamp, user::entities::User};

    fn request_parts() -> Parts {
        let (parts, _) = axum::http::Request::builder().body(()).unwrap().into_parts();
        parts
    }

    fn identity() -> Identity {
        let (now, _) = generate_timestamp();
        Identity::User(User {
            id: Uuid::new_v4(),
            email: "owner@example.com".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            address: "1 Main St".to_string(),
            phone: "555-0100".to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    #[tokio::test]
    async fn test_missing_identity_is_rejected_as_unauthorized() {
        let mut parts = request_parts();

        let result = RequiredIdentity::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_identity_extension_is_extracted() {
        let identity = identity();
        let mut parts = request_parts();
        parts.extensions.insert(identity.clone());

        let RequiredIdentity(extracted) = RequiredIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(extracted, identity);
    }
}
