//! # eventhub-entity
//!
//! Domain models for EventHub (users, events) and the typed input
//! validators with create/update variants per entity.

pub mod event;
pub mod user;
pub mod validation;
