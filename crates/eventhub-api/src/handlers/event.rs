//! Event handlers — CRUD, image upload, PDF export.
//!
//! Create and update take multipart form data: text fields plus an
//! optional `image` part. Participants arrive as one comma-delimited
//! field.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use eventhub_core::error::AppError;
use eventhub_entity::event::{CreateEventInput, UpdateEventInput};
use eventhub_service::ImageUpload;
use eventhub_service::event::participants::parse_participant_ids;

use crate::dto::response::{EventResponse, MessageResponse, PopulatedEventResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/events — organizer-only, multipart.
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<EventResponse>), ApiError> {
    let form = EventForm::parse(multipart).await?;

    let input = CreateEventInput {
        title: form.title,
        description: form.description,
        location: form.location,
        date: form.date,
        participants: form.participants.unwrap_or_default(),
        max_participants: form.max_participants,
    };

    let event = state
        .event_service
        .create(auth.context(), input, form.image)
        .await?;
    Ok((StatusCode::CREATED, Json(event.into())))
}

/// GET /api/events — authenticated.
pub async fn list_events(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<PopulatedEventResponse>>, ApiError> {
    let events = state.event_service.list(auth.context()).await?;
    Ok(Json(
        events
            .into_iter()
            .map(PopulatedEventResponse::from)
            .collect(),
    ))
}

/// GET /api/events/{id} — authenticated.
pub async fn get_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<PopulatedEventResponse>, ApiError> {
    let event = state.event_service.get(auth.context(), id).await?;
    Ok(Json(event.into()))
}

/// PUT /api/events/{id} — organizer-only, multipart.
pub async fn update_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<EventResponse>, ApiError> {
    let form = EventForm::parse(multipart).await?;

    let input = UpdateEventInput {
        title: form.title,
        description: form.description,
        location: form.location,
        date: form.date,
        participants: form.participants,
        max_participants: form.max_participants,
    };

    let event = state
        .event_service
        .update(auth.context(), id, input, form.image)
        .await?;
    Ok(Json(event.into()))
}

/// DELETE /api/events/{id} — organizer-only.
pub async fn delete_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.event_service.delete(auth.context(), id).await?;
    Ok(Json(MessageResponse::new(
        "Event has been deleted successfully",
    )))
}

/// GET /api/events/pdf — organizer-only.
pub async fn events_pdf(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Response, ApiError> {
    let events = state.event_service.list_for_export(auth.context()).await?;
    let bytes = state.pdf_renderer.render(&events)?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"events.pdf\"",
        )
        .body(Body::from(bytes))
        .map_err(|e| ApiError(AppError::with_source(
            eventhub_core::error::ErrorKind::Internal,
            "Failed to build PDF response",
            e,
        )))
}

/// Fields accepted on the event multipart form.
#[derive(Debug, Default)]
struct EventForm {
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    date: Option<DateTime<Utc>>,
    participants: Option<Vec<Uuid>>,
    max_participants: Option<i32>,
    image: Option<ImageUpload>,
}

impl EventForm {
    async fn parse(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::validation(format!("Invalid multipart payload: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "image" => {
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let file_name = field.file_name().unwrap_or("upload").to_string();
                    let data = field.bytes().await.map_err(|e| {
                        AppError::validation(format!("Failed to read image upload: {e}"))
                    })?;
                    form.image = Some(ImageUpload {
                        data,
                        content_type,
                        file_name,
                    });
                }
                "title" => form.title = Some(text_field(field).await?),
                "description" => form.description = Some(text_field(field).await?),
                "location" => form.location = Some(text_field(field).await?),
                "date" => form.date = Some(parse_date(&text_field(field).await?)?),
                "participants" => {
                    form.participants = Some(parse_participant_ids(&text_field(field).await?)?);
                }
                "maxParticipants" => {
                    form.max_participants = Some(parse_max(&text_field(field).await?)?);
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

async fn text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError(AppError::validation(format!("Invalid form field: {e}"))))
}

fn parse_date(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| ApiError(AppError::validation("\"date\" must be a valid date")))
}

fn parse_max(raw: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ApiError(AppError::validation("\"maxParticipants\" must be a number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_rfc3339() {
        assert!(parse_date("2031-06-01T18:00:00Z").is_ok());
        assert!(parse_date(" 2031-06-01T18:00:00+02:00 ").is_ok());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("next tuesday").is_err());
        assert!(parse_date("2031-06-01").is_err());
    }

    #[test]
    fn test_parse_max_participants() {
        assert_eq!(parse_max("25").unwrap(), 25);
        assert!(parse_max("many").is_err());
    }
}
