//! JWT claims structure embedded in every issued token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use eventhub_entity::user::UserRole;

use crate::policy::Identity;

/// JWT claims payload: the signed identity assertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the verified identity carried by these claims.
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.sub,
            role: self.role,
        }
    }
}
