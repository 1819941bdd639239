//! Event services.

pub mod participants;
pub mod service;

pub use service::{EventService, ImageUpload, ParticipantSummary, PopulatedEvent};
