//! Access policy evaluation: who may perform which action on which resource.

pub mod action;
pub mod evaluator;

pub use action::ResourceAction;
pub use evaluator::{Identity, PolicyEvaluator};
