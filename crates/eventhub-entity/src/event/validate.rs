//! Typed input validators for event operations (create and update variants).

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::model::{EventPatch, NewEvent};
use crate::validation::{FieldViolation, check_length};

const TITLE_MIN: usize = 6;
const TITLE_MAX: usize = 200;
const DESCRIPTION_MIN: usize = 6;
const DESCRIPTION_MAX: usize = 1000;
const LOCATION_MIN: usize = 6;
const LOCATION_MAX: usize = 200;

/// Raw event creation payload before validation.
#[derive(Debug, Clone, Default)]
pub struct CreateEventInput {
    /// Title.
    pub title: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Event date.
    pub date: Option<DateTime<Utc>>,
    /// Parsed participant IDs.
    pub participants: Vec<Uuid>,
    /// Optional participant bound.
    pub max_participants: Option<i32>,
}

impl CreateEventInput {
    /// Validate the creation payload against the current time.
    pub fn validate(self) -> Result<NewEvent, Vec<FieldViolation>> {
        self.validate_at(Utc::now())
    }

    /// Validate the creation payload against an explicit `now`.
    pub fn validate_at(self, now: DateTime<Utc>) -> Result<NewEvent, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let title = required_text(
            "title",
            self.title,
            TITLE_MIN,
            TITLE_MAX,
            &mut violations,
        );
        let description = required_text(
            "description",
            self.description,
            DESCRIPTION_MIN,
            DESCRIPTION_MAX,
            &mut violations,
        );
        let location = required_text(
            "location",
            self.location,
            LOCATION_MIN,
            LOCATION_MAX,
            &mut violations,
        );

        let date = match self.date {
            Some(date) => {
                if let Some(v) = check_future_date(date, now) {
                    violations.push(v);
                }
                Some(date)
            }
            None => {
                violations.push(FieldViolation::required("date"));
                None
            }
        };

        if let Some(v) = check_participant_bound(
            self.participants.len(),
            self.max_participants,
        ) {
            violations.push(v);
        }

        if violations.is_empty() {
            Ok(NewEvent {
                title: title.unwrap_or_default(),
                description: description.unwrap_or_default(),
                location: location.unwrap_or_default(),
                date: date.unwrap_or(now),
                image_url: None,
                image_key: None,
                participants: self.participants,
                max_participants: self.max_participants,
                created_by: None,
            })
        } else {
            Err(violations)
        }
    }
}

/// Raw event update payload before validation.
///
/// All fields are optional, but a present field must still satisfy the
/// same bounds as at creation: a present-but-empty title fails.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventInput {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New date.
    pub date: Option<DateTime<Utc>>,
    /// Replacement participant list.
    pub participants: Option<Vec<Uuid>>,
    /// New participant bound.
    pub max_participants: Option<i32>,
}

impl UpdateEventInput {
    /// Validate the update payload against the current time.
    pub fn validate(self) -> Result<EventPatch, Vec<FieldViolation>> {
        self.validate_at(Utc::now())
    }

    /// Validate the update payload against an explicit `now`.
    pub fn validate_at(self, now: DateTime<Utc>) -> Result<EventPatch, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let title = optional_text("title", self.title, TITLE_MIN, TITLE_MAX, &mut violations);
        let description = optional_text(
            "description",
            self.description,
            DESCRIPTION_MIN,
            DESCRIPTION_MAX,
            &mut violations,
        );
        let location = optional_text(
            "location",
            self.location,
            LOCATION_MIN,
            LOCATION_MAX,
            &mut violations,
        );

        if let Some(date) = self.date {
            if let Some(v) = check_future_date(date, now) {
                violations.push(v);
            }
        }

        if let (Some(participants), Some(_)) = (&self.participants, self.max_participants) {
            if let Some(v) = check_participant_bound(participants.len(), self.max_participants) {
                violations.push(v);
            }
        } else if self.max_participants.is_some() {
            if let Some(v) = check_participant_bound(0, self.max_participants) {
                violations.push(v);
            }
        }

        if violations.is_empty() {
            Ok(EventPatch {
                title,
                description,
                location,
                date: self.date,
                image_url: None,
                image_key: None,
                participants: self.participants,
                max_participants: self.max_participants,
            })
        } else {
            Err(violations)
        }
    }
}

/// Check that the participant count fits the bound and the bound is sane.
pub fn check_participant_bound(
    participant_count: usize,
    max_participants: Option<i32>,
) -> Option<FieldViolation> {
    let max = max_participants?;
    if max < 1 {
        return Some(FieldViolation::new(
            "maxParticipants",
            "\"maxParticipants\" must be at least 1",
        ));
    }
    if participant_count > max as usize {
        return Some(FieldViolation::new(
            "participants",
            format!("Event allows at most {max} participants, got {participant_count}"),
        ));
    }
    None
}

fn check_future_date(date: DateTime<Utc>, now: DateTime<Utc>) -> Option<FieldViolation> {
    if date <= now {
        Some(FieldViolation::new(
            "date",
            "\"date\" must be in the future",
        ))
    } else {
        None
    }
}

fn required_text(
    field: &'static str,
    value: Option<String>,
    min: usize,
    max: usize,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value.map(|s| s.trim().to_string()) {
        Some(v) if !v.is_empty() => {
            if let Some(violation) = check_length(field, &v, min, max) {
                violations.push(violation);
            }
            Some(v)
        }
        _ => {
            violations.push(FieldViolation::required(field));
            None
        }
    }
}

fn optional_text(
    field: &'static str,
    value: Option<String>,
    min: usize,
    max: usize,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let value = value.map(|s| s.trim().to_string())?;
    if let Some(violation) = check_length(field, &value, min, max) {
        violations.push(violation);
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_create(now: DateTime<Utc>) -> CreateEventInput {
        CreateEventInput {
            title: Some("Rust Meetup Lyon".to_string()),
            description: Some("Monthly meetup about systems programming".to_string()),
            location: Some("12 Rue de la République".to_string()),
            date: Some(now + Duration::days(7)),
            participants: Vec::new(),
            max_participants: None,
        }
    }

    #[test]
    fn test_valid_create_accepted() {
        let now = Utc::now();
        let event = valid_create(now).validate_at(now).expect("should validate");
        assert_eq!(event.title, "Rust Meetup Lyon");
    }

    #[test]
    fn test_create_requires_title() {
        let now = Utc::now();
        let mut input = valid_create(now);
        input.title = None;
        let violations = input.validate_at(now).unwrap_err();
        assert!(violations.iter().any(|v| v.field == "title"));
    }

    #[test]
    fn test_create_rejects_past_date() {
        let now = Utc::now();
        let mut input = valid_create(now);
        input.date = Some(now - Duration::hours(1));
        let violations = input.validate_at(now).unwrap_err();
        assert!(violations.iter().any(|v| v.field == "date"));
    }

    #[test]
    fn test_create_rejects_date_exactly_now() {
        let now = Utc::now();
        let mut input = valid_create(now);
        input.date = Some(now);
        assert!(input.validate_at(now).is_err());
    }

    #[test]
    fn test_update_present_but_empty_title_fails() {
        let input = UpdateEventInput {
            title: Some("".to_string()),
            ..Default::default()
        };
        let violations = input.validate().unwrap_err();
        assert!(violations.iter().any(|v| v.field == "title"));
    }

    #[test]
    fn test_update_all_absent_is_valid() {
        let patch = UpdateEventInput::default().validate().expect("empty patch");
        assert!(patch.title.is_none());
    }

    #[test]
    fn test_max_participants_enforced_at_create() {
        let now = Utc::now();
        let mut input = valid_create(now);
        input.participants = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        input.max_participants = Some(2);
        let violations = input.validate_at(now).unwrap_err();
        assert!(violations.iter().any(|v| v.field == "participants"));
    }

    #[test]
    fn test_max_participants_must_be_positive() {
        let now = Utc::now();
        let mut input = valid_create(now);
        input.max_participants = Some(0);
        let violations = input.validate_at(now).unwrap_err();
        assert!(violations.iter().any(|v| v.field == "maxParticipants"));
    }

    #[test]
    fn test_title_bounds() {
        let now = Utc::now();
        let mut input = valid_create(now);
        input.title = Some("tiny".to_string());
        assert!(input.validate_at(now).is_err());

        let mut input = valid_create(now);
        input.title = Some("x".repeat(201));
        assert!(input.validate_at(now).is_err());
    }
}
