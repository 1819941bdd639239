//! `AuthUser` extractor — pulls the JWT from the `token` header,
//! verifies it, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use eventhub_core::error::AppError;
use eventhub_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Identity travels in a custom `token` header, not Authorization.
        let token = parts
            .headers
            .get("token")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthenticated("Access denied, no token was provided"))?;

        let claims = state.jwt_decoder.decode_token(token)?;

        Ok(AuthUser(RequestContext::new(claims.identity())))
    }
}
