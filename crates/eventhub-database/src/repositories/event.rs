//! Event repository.
//!
//! Participants are stored inline as a `uuid[]` column; the service layer
//! resolves them into user summaries when listing.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_entity::event::{Event, EventPatch, NewEvent};

/// Persistence operations on events, as the service layer sees them.
/// Implemented by [`EventRepository`] for PostgreSQL and by in-memory
/// doubles in service tests.
#[async_trait]
pub trait EventStore: Send + Sync + std::fmt::Debug + 'static {
    async fn create(&self, input: NewEvent) -> AppResult<Event>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>>;

    /// All events, soonest first.
    async fn find_all(&self) -> AppResult<Vec<Event>>;

    /// Apply a partial update. Absent fields keep their current value;
    /// image fields are updated together so url and key never drift apart.
    async fn update(&self, id: Uuid, patch: EventPatch) -> AppResult<Option<Event>>;

    /// Delete an event, returning whether a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Repository for events.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn create(&self, input: NewEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events
                (title, description, location, date, image_url, image_key,
                 participants, max_participants, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.location)
        .bind(input.date)
        .bind(&input.image_url)
        .bind(&input.image_key)
        .bind(&input.participants)
        .bind(input.max_participants)
        .bind(input.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create event", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find event", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))
    }

    async fn update(&self, id: Uuid, patch: EventPatch) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>(
            r#"
            UPDATE events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                location = COALESCE($4, location),
                date = COALESCE($5, date),
                image_url = COALESCE($6, image_url),
                image_key = COALESCE($7, image_key),
                participants = COALESCE($8, participants),
                max_participants = COALESCE($9, max_participants),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(&patch.location)
        .bind(patch.date)
        .bind(&patch.image_url)
        .bind(&patch.image_key)
        .bind(&patch.participants)
        .bind(patch.max_participants)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update event", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))?;

        Ok(result.rows_affected() > 0)
    }
}
