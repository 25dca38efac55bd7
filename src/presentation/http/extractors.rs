//! Custom Extractors
//!
//! Axum extractors for session context.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::presentation::middleware::AuthUser;

/// Session identity placed in request extensions by the optional auth
/// middleware. `None` for anonymous requests.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<AuthUser>);

impl CurrentUser {
    pub fn user_id(&self) -> Option<&str> {
        self.0.as_ref().map(|user| user.user_id.as_str())
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(parts.extensions.get::<AuthUser>().cloned()))
    }
}
