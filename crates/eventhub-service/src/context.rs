//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use eventhub_auth::Identity;
use eventhub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built by the identity extractor and passed into service methods so that
/// every operation knows *who* is acting.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context from a verified identity.
    pub fn new(identity: Identity) -> Self {
        Self {
            user_id: identity.user_id,
            role: identity.role,
            request_time: Utc::now(),
        }
    }

    /// The verified identity this context was built from.
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.user_id,
            role: self.role,
        }
    }

    /// Returns whether the current user is an organizer.
    pub fn is_organizer(&self) -> bool {
        self.role.is_organizer()
    }
}
