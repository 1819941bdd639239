//! Event entity: model and input validators.

pub mod model;
pub mod validate;

pub use model::{Event, EventPatch, NewEvent};
pub use validate::{CreateEventInput, UpdateEventInput, check_participant_bound};
