//! Report generation.

pub mod pdf;

pub use pdf::EventsPdfRenderer;
