//! Repository implementations for users and events.

pub mod event;
pub mod user;

pub use event::{EventRepository, EventStore};
pub use user::{UserRepository, UserStore};
