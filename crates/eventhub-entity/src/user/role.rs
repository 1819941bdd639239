//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in EventHub.
///
/// Organizers manage all events and users; participants are restricted
/// to self-service actions and being enrolled in events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// May manage any event and any user.
    Organizer,
    /// May only act on their own user resource; may be enrolled in events.
    Participant,
}

impl UserRole {
    /// Check if this role is an organizer.
    pub fn is_organizer(&self) -> bool {
        matches!(self, Self::Organizer)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organizer => "organizer",
            Self::Participant => "participant",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = eventhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "organizer" => Ok(Self::Organizer),
            "participant" => Ok(Self::Participant),
            _ => Err(eventhub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: organizer, participant"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("organizer".parse::<UserRole>().unwrap(), UserRole::Organizer);
        assert_eq!(
            "PARTICIPANT".parse::<UserRole>().unwrap(),
            UserRole::Participant
        );
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(UserRole::Organizer.to_string(), "organizer");
        assert_eq!(UserRole::Participant.to_string(), "participant");
    }
}
