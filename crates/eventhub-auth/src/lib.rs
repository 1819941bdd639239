//! # eventhub-auth
//!
//! Token issue/verify, password hashing, and the access policy evaluator.

pub mod jwt;
pub mod password;
pub mod policy;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use policy::{Identity, PolicyEvaluator, ResourceAction};
