//! Access policy evaluator.
//!
//! Given a verified identity and a target resource reference, decides
//! allow/deny for an action. Rules:
//!
//! - Organizers are permitted every action on every resource, including
//!   managing any user and any event.
//! - Participants are permitted own-scoped actions only when the target
//!   resource's owner reference equals their own user ID.
//! - Deletion is never own-scoped: it requires the Organizer role
//!   regardless of who created the resource.
//!
//! Missing or invalid tokens never reach the evaluator; they are rejected
//! by the identity extractor with 401 before any policy decision.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use eventhub_core::error::AppError;
use eventhub_entity::user::UserRole;

use super::action::ResourceAction;

/// The verified identity carried by a request token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role at token issuance.
    pub role: UserRole,
}

impl Identity {
    /// Returns whether this identity holds the Organizer role.
    pub fn is_organizer(&self) -> bool {
        self.role.is_organizer()
    }
}

/// Evaluates access policy decisions for verified identities.
#[derive(Debug, Clone, Default)]
pub struct PolicyEvaluator;

impl PolicyEvaluator {
    /// Creates a new evaluator with the default rule set.
    pub fn new() -> Self {
        Self
    }

    /// Decide whether `identity` may perform `action` on the resource
    /// owned by `owner` (absent for creation and collection-level access).
    ///
    /// Returns `Ok(())` to continue to the handler, or a forbidden error.
    pub fn authorize(
        &self,
        identity: &Identity,
        action: ResourceAction,
        owner: Option<Uuid>,
    ) -> Result<(), AppError> {
        match identity.role {
            UserRole::Organizer => Ok(()),
            UserRole::Participant => {
                if action.is_own_scoped() && owner == Some(identity.user_id) {
                    Ok(())
                } else {
                    Err(AppError::forbidden(
                        "You are not allowed to perform this action",
                    ))
                }
            }
        }
    }

    /// Require the Organizer role outright, for organizer-only routes.
    pub fn require_organizer(&self, identity: &Identity) -> Result<(), AppError> {
        if identity.is_organizer() {
            Ok(())
        } else {
            Err(AppError::forbidden("Only an organizer can access this"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventhub_core::error::ErrorKind;

    fn organizer() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            role: UserRole::Organizer,
        }
    }

    fn participant() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            role: UserRole::Participant,
        }
    }

    #[test]
    fn test_organizer_permitted_all_actions() {
        let policy = PolicyEvaluator::new();
        let identity = organizer();
        let other = Uuid::new_v4();

        for action in [
            ResourceAction::ReadOwn,
            ResourceAction::ReadAny,
            ResourceAction::WriteOwn,
            ResourceAction::WriteAny,
            ResourceAction::Delete,
        ] {
            assert!(policy.authorize(&identity, action, Some(other)).is_ok());
            assert!(policy.authorize(&identity, action, None).is_ok());
        }
    }

    #[test]
    fn test_participant_may_update_self() {
        let policy = PolicyEvaluator::new();
        let identity = participant();

        assert!(
            policy
                .authorize(&identity, ResourceAction::WriteOwn, Some(identity.user_id))
                .is_ok()
        );
        assert!(
            policy
                .authorize(&identity, ResourceAction::ReadOwn, Some(identity.user_id))
                .is_ok()
        );
    }

    #[test]
    fn test_participant_denied_other_users_resource() {
        let policy = PolicyEvaluator::new();
        let identity = participant();
        let other = Uuid::new_v4();

        let err = policy
            .authorize(&identity, ResourceAction::WriteOwn, Some(other))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_participant_denied_any_scoped_actions() {
        let policy = PolicyEvaluator::new();
        let identity = participant();

        for action in [ResourceAction::ReadAny, ResourceAction::WriteAny] {
            assert!(
                policy
                    .authorize(&identity, action, Some(identity.user_id))
                    .is_err()
            );
        }
    }

    // Deletion is role-only: owning the resource does not help a participant.
    #[test]
    fn test_participant_delete_denied_even_when_owner() {
        let policy = PolicyEvaluator::new();
        let identity = participant();

        let err = policy
            .authorize(&identity, ResourceAction::Delete, Some(identity.user_id))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_participant_denied_creation_scope() {
        let policy = PolicyEvaluator::new();
        let identity = participant();

        // No owner reference (creation / collection access) is never own-scoped.
        assert!(
            policy
                .authorize(&identity, ResourceAction::WriteOwn, None)
                .is_err()
        );
    }

    #[test]
    fn test_require_organizer() {
        let policy = PolicyEvaluator::new();
        assert!(policy.require_organizer(&organizer()).is_ok());
        assert_eq!(
            policy.require_organizer(&participant()).unwrap_err().kind,
            ErrorKind::Forbidden
        );
    }
}
