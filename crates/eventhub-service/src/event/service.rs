//! Event CRUD, participant cross-validation, and image orchestration.

use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use eventhub_auth::PolicyEvaluator;
use eventhub_core::config::{EventsConfig, MediaConfig};
use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_core::traits::{ImageStore, StoredImage};
use eventhub_database::repositories::{EventStore, UserStore};
use eventhub_entity::event::{
    CreateEventInput, Event, EventPatch, UpdateEventInput, check_participant_bound,
};
use eventhub_entity::user::User;
use eventhub_entity::validation::first_violation;
use eventhub_storage::TempSpool;

use super::participants::check_participant_roles;
use crate::context::RequestContext;

/// An image file received with a create or update request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Raw image bytes.
    pub data: Bytes,
    /// MIME type as declared by the client.
    pub content_type: String,
    /// Original file name, used for the extension only.
    pub file_name: String,
}

/// Participant fields exposed when an event is listed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSummary {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}

/// An event with its participant references resolved to user summaries.
#[derive(Debug, Clone)]
pub struct PopulatedEvent {
    pub event: Event,
    pub participants: Vec<ParticipantSummary>,
}

/// Handles event CRUD with participant validation and image storage.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Event store.
    event_repo: Arc<dyn EventStore>,
    /// User store, for participant resolution.
    user_repo: Arc<dyn UserStore>,
    /// Image store (local or S3).
    image_store: Arc<dyn ImageStore>,
    /// Access policy evaluator.
    policy: PolicyEvaluator,
    /// Media settings (temp dir, size limit).
    media: MediaConfig,
    /// Event listing behavior.
    events_config: EventsConfig,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(
        event_repo: Arc<dyn EventStore>,
        user_repo: Arc<dyn UserStore>,
        image_store: Arc<dyn ImageStore>,
        media: MediaConfig,
        events_config: EventsConfig,
    ) -> Self {
        Self {
            event_repo,
            user_repo,
            image_store,
            policy: PolicyEvaluator::new(),
            media,
            events_config,
        }
    }

    /// Create an event. Organizer-only.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateEventInput,
        image: Option<ImageUpload>,
    ) -> AppResult<Event> {
        self.policy.require_organizer(&ctx.identity())?;

        let mut new_event = input.validate().map_err(first_violation)?;
        self.verify_participants(&new_event.participants).await?;

        if let Some(image) = image {
            let stored = self.store_image(&image).await?;
            new_event.image_url = Some(stored.url);
            new_event.image_key = Some(stored.key);
        }
        new_event.created_by = Some(ctx.user_id);

        let event = self.event_repo.create(new_event).await?;
        info!(event_id = %event.id, "Event created");
        Ok(event)
    }

    /// List all events with participants resolved to user summaries.
    ///
    /// An empty store either returns an empty list or fails with 404,
    /// depending on `events.not_found_when_empty`.
    pub async fn list(&self, _ctx: &RequestContext) -> AppResult<Vec<PopulatedEvent>> {
        let events = self.event_repo.find_all().await?;

        if events.is_empty() && self.events_config.not_found_when_empty {
            return Err(AppError::not_found("No events found."));
        }

        let all_ids: Vec<Uuid> = events
            .iter()
            .flat_map(|e| e.participants.iter().copied())
            .collect();
        let users = self.user_repo.find_by_ids(&all_ids).await?;

        Ok(populate_events(events, &users))
    }

    /// Resolve every event for the PDF export. Organizer-only; an empty
    /// store renders an empty listing instead of failing.
    pub async fn list_for_export(&self, ctx: &RequestContext) -> AppResult<Vec<PopulatedEvent>> {
        self.policy.require_organizer(&ctx.identity())?;

        let events = self.event_repo.find_all().await?;
        let all_ids: Vec<Uuid> = events
            .iter()
            .flat_map(|e| e.participants.iter().copied())
            .collect();
        let users = self.user_repo.find_by_ids(&all_ids).await?;

        Ok(populate_events(events, &users))
    }

    /// Fetch one event with participants resolved.
    pub async fn get(&self, _ctx: &RequestContext, event_id: Uuid) -> AppResult<PopulatedEvent> {
        let event = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let users = self.user_repo.find_by_ids(&event.participants).await?;
        let mut populated = populate_events(vec![event], &users);
        Ok(populated.remove(0))
    }

    /// Update an event. Organizer-only. Replacing the image removes the
    /// previously stored object.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        event_id: Uuid,
        input: UpdateEventInput,
        image: Option<ImageUpload>,
    ) -> AppResult<Event> {
        self.policy.require_organizer(&ctx.identity())?;

        let existing = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let mut patch = input.validate().map_err(first_violation)?;

        check_update_bound(&existing, &patch)?;
        if let Some(ref participants) = patch.participants {
            self.verify_participants(participants).await?;
        }

        let previous_image = if image.is_some() { existing.image() } else { None };

        if let Some(image) = image {
            let stored = self.store_image(&image).await?;
            patch.image_url = Some(stored.url);
            patch.image_key = Some(stored.key);
        }

        let updated = self
            .event_repo
            .update(event_id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        if let Some(old) = previous_image {
            if let Err(e) = self.image_store.remove(&old.key).await {
                warn!(key = %old.key, error = %e, "Failed to remove replaced image");
            }
        }

        info!(event_id = %event_id, "Event updated");
        Ok(updated)
    }

    /// Delete an event and its stored image. Organizer-only.
    pub async fn delete(&self, ctx: &RequestContext, event_id: Uuid) -> AppResult<()> {
        self.policy.require_organizer(&ctx.identity())?;

        let event = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        if let Some(image) = event.image() {
            if let Err(e) = self.image_store.remove(&image.key).await {
                warn!(key = %image.key, error = %e, "Failed to remove event image");
            }
        }

        self.event_repo.delete(event_id).await?;
        info!(event_id = %event_id, "Event deleted");
        Ok(())
    }

    /// All-or-nothing participant role check: every identifier must
    /// resolve to a user with role Participant.
    async fn verify_participants(&self, participants: &[Uuid]) -> AppResult<()> {
        if participants.is_empty() {
            return Ok(());
        }
        let resolved = self.user_repo.find_by_ids(participants).await?;
        check_participant_roles(participants, &resolved)
    }

    /// Spool the upload to the temp directory, then hand it to the image
    /// store. The spool file is removed on success and failure alike.
    async fn store_image(&self, image: &ImageUpload) -> AppResult<StoredImage> {
        check_image_size(image.data.len() as u64, self.media.max_image_size_bytes)?;

        let spool = TempSpool::write(&self.media.temp_dir, &image.data).await?;
        let key = format!(
            "events/{}.{}",
            Uuid::new_v4(),
            extension_for(&image.file_name, &image.content_type)
        );

        let data = spool.read().await?;
        self.image_store
            .upload(&key, data, &image.content_type)
            .await
    }
}

/// Reject uploads larger than the configured limit.
pub fn check_image_size(size_bytes: u64, max_bytes: u64) -> AppResult<()> {
    if size_bytes > max_bytes {
        Err(AppError::validation("Image size should be less than 2MB"))
    } else {
        Ok(())
    }
}

/// Enforce the participant bound when an update touches the list or the
/// bound. Either side may come from the patch; the other keeps the
/// stored value, so lowering the bound below the current enrollment is
/// rejected even when the list itself is not resent.
fn check_update_bound(existing: &Event, patch: &EventPatch) -> AppResult<()> {
    if patch.participants.is_none() && patch.max_participants.is_none() {
        return Ok(());
    }

    let count = patch
        .participants
        .as_ref()
        .map_or(existing.participants.len(), Vec::len);
    let max = patch.max_participants.or(existing.max_participants);

    if let Some(v) = check_participant_bound(count, max) {
        return Err(AppError::validation(v.message));
    }
    Ok(())
}

/// Resolve participant references against the given users. Identifiers
/// without a matching user are skipped (the user was deleted since).
fn populate_events(events: Vec<Event>, users: &[User]) -> Vec<PopulatedEvent> {
    events
        .into_iter()
        .map(|event| {
            let participants = event
                .participants
                .iter()
                .filter_map(|id| users.iter().find(|u| u.id == *id))
                .map(|u| ParticipantSummary {
                    id: u.id,
                    full_name: u.full_name.clone(),
                    email: u.email.clone(),
                })
                .collect();
            PopulatedEvent {
                event,
                participants,
            }
        })
        .collect()
}

/// Pick a file extension from the upload's name, falling back to the
/// declared MIME type.
fn extension_for(file_name: &str, content_type: &str) -> String {
    if let Some((_, ext)) = file_name.rsplit_once('.') {
        if !ext.is_empty() && ext.len() <= 5 {
            return ext.to_lowercase();
        }
    }
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "bin",
    }
    .to_string()
}
