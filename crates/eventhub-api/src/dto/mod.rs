//! Wire DTOs. All JSON keys are camelCase.

pub mod request;
pub mod response;
