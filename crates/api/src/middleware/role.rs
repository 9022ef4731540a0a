//! Acting-role extraction and gating.
//!
//! There is no authentication (demo mode, single actor per process); the
//! client declares its role in the `X-Role` header and the authz policy
//! decides what that role may do.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;
use ledgerdesk_core::authz::{Action, Policy, Role};
use ledgerdesk_shared::AppError;

/// The role the client is acting as, from the `X-Role` header.
#[derive(Debug, Clone, Copy)]
pub struct ActingRole(pub Role);

impl ActingRole {
    /// Checks the authz policy for an action.
    ///
    /// # Errors
    ///
    /// Returns a `403` error when the role may not perform the action.
    pub fn require(self, action: Action) -> Result<(), ApiError> {
        if Policy::allows(self.0, action) {
            Ok(())
        } else {
            Err(ApiError(AppError::Forbidden(format!(
                "role {:?} may not perform {:?}",
                self.0, action
            ))))
        }
    }
}

impl<S> FromRequestParts<S> for ActingRole
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("x-role")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError(AppError::Forbidden("X-Role header required".into())))?;

        header
            .parse::<Role>()
            .map(Self)
            .map_err(|e| ApiError(AppError::Forbidden(e)))
    }
}
