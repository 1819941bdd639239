//! Traits defined in core and implemented by the infrastructure crates.

pub mod image_store;

pub use image_store::{ImageStore, StoredImage};
