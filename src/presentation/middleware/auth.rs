//! Authentication Middleware
//!
//! Resolves the session identity from a bearer JWT. The sidebar decides
//! for itself what an anonymous request means, so a missing or invalid
//! token never fails the request here.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use crate::startup::AppState;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (identity provider user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Authenticated user extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: String,
}

/// Validate a token and return the identity it was issued for.
pub fn verify_token(token: &str, secret: &str) -> Result<AuthUser, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("Token expired".into())
        }
        _ => AppError::Unauthorized("Invalid token".into()),
    })?;

    if token_data.claims.sub.is_empty() {
        return Err(AppError::Unauthorized("Invalid token claims".into()));
    }

    Ok(AuthUser {
        user_id: token_data.claims.sub,
    })
}

/// Optional authentication middleware (doesn't fail if no token)
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(Authorization(bearer)) = request.headers().typed_get::<Authorization<Bearer>>() {
        match verify_token(bearer.token(), &state.settings.jwt.secret) {
            Ok(user) => {
                request.extensions_mut().insert(user);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unusable bearer token");
            }
        }
    }

    next.run(request).await
}
