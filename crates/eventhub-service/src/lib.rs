//! # eventhub-service
//!
//! Business logic service layer for EventHub. Each service orchestrates
//! repositories, the image store, and authentication to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod event;
pub mod report;
pub mod user;

pub use context::RequestContext;
pub use event::{EventService, ImageUpload, ParticipantSummary, PopulatedEvent};
pub use report::EventsPdfRenderer;
pub use user::UserService;
