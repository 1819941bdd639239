//! User entity: model, role, and input validators.

pub mod model;
pub mod role;
pub mod validate;

pub use model::{CreateUser, UpdateUser, User};
pub use role::UserRole;
pub use validate::{
    LoginCredentials, LoginInput, RegisterUser, RegisterUserInput, UpdateUserInput, UserPatch,
};
