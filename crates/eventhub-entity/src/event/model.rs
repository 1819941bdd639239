//! Event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use eventhub_core::traits::StoredImage;

/// An event managed by an organizer.
///
/// Participants are weak references: the event stores user identifiers
/// and does not own the user lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// Venue or address.
    pub location: String,
    /// When the event takes place; strictly future at create/update time.
    pub date: DateTime<Utc>,
    /// Public URL of the event image, if one was uploaded.
    pub image_url: Option<String>,
    /// Image-store key of the event image, used for removal on replace/delete.
    pub image_key: Option<String>,
    /// Enrolled participants (user IDs, each with role Participant).
    pub participants: Vec<Uuid>,
    /// Optional upper bound on the participant count.
    pub max_participants: Option<i32>,
    /// The organizer who created the event.
    pub created_by: Option<Uuid>,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Return the stored image reference, if any.
    pub fn image(&self) -> Option<StoredImage> {
        match (&self.image_url, &self.image_key) {
            (Some(url), Some(key)) => Some(StoredImage {
                url: url.clone(),
                key: key.clone(),
            }),
            _ => None,
        }
    }
}

/// Accepted payload for creating an event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Location.
    pub location: String,
    /// Event date (validated strictly future).
    pub date: DateTime<Utc>,
    /// Public URL of the uploaded image, set by the service after storage.
    pub image_url: Option<String>,
    /// Image-store key of the uploaded image.
    pub image_key: Option<String>,
    /// Participant user IDs (validated against role Participant).
    pub participants: Vec<Uuid>,
    /// Optional participant bound.
    pub max_participants: Option<i32>,
    /// The organizer creating the event.
    pub created_by: Option<Uuid>,
}

/// Accepted payload for updating an event. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New date.
    pub date: Option<DateTime<Utc>>,
    /// Replacement image URL, set together with `image_key`.
    pub image_url: Option<String>,
    /// Replacement image-store key.
    pub image_key: Option<String>,
    /// Replacement participant list.
    pub participants: Option<Vec<Uuid>>,
    /// New participant bound.
    pub max_participants: Option<i32>,
}
