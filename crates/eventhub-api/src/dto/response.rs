//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use eventhub_entity::event::Event;
use eventhub_entity::user::User;
use eventhub_service::{ParticipantSummary, PopulatedEvent};

/// Simple message body.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// User fields exposed over the wire. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role.to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Login response: user fields plus the issued token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub user_id: Uuid,
}

/// Stored image reference on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub url: String,
    pub key: String,
}

/// Event as returned from create/update, participants as raw IDs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageResponse>,
    pub participants: Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        let image = event.image().map(|i| ImageResponse {
            url: i.url,
            key: i.key,
        });
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            location: event.location,
            date: event.date,
            image,
            participants: event.participants,
            max_participants: event.max_participants,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// Event as returned from list/get, participants resolved to summaries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedEventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageResponse>,
    pub participants: Vec<ParticipantSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PopulatedEvent> for PopulatedEventResponse {
    fn from(populated: PopulatedEvent) -> Self {
        let event = populated.event;
        let image = event.image().map(|i| ImageResponse {
            url: i.url,
            key: i.key,
        });
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            location: event.location,
            date: event.date,
            image,
            participants: populated.participants,
            max_participants: event.max_participants,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// GET /api/health body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: bool,
    pub media: bool,
    pub media_provider: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventhub_entity::user::UserRole;

    #[test]
    fn test_user_response_never_carries_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            full_name: "Alice Example".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "secret-hash".to_string(),
            role: UserRole::Participant,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("fullName"));
        assert!(json.contains("participant"));
    }

    #[test]
    fn test_login_response_flattens_user_fields() {
        let user = UserResponse {
            id: Uuid::new_v4(),
            full_name: "Alice Example".to_string(),
            email: "alice@example.com".to_string(),
            role: "participant".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let id = user.id;

        let json: serde_json::Value = serde_json::to_value(LoginResponse {
            user,
            token: "jwt".to_string(),
            user_id: id,
        })
        .unwrap();

        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["token"], "jwt");
        assert_eq!(json["userId"], id.to_string());
    }
}
