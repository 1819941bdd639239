//! # eventhub-core
//!
//! Core crate for EventHub. Contains the unified error system,
//! configuration schemas, and the image-store trait.
//!
//! This crate has **no** internal dependencies on other EventHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
