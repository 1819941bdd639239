//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user in the EventHub system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full name shown on event listings.
    pub full_name: String,
    /// Email address (unique, case-insensitive).
    pub email: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// User role.
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user is an organizer.
    pub fn is_organizer(&self) -> bool {
        self.role.is_organizer()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Full name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
}

/// Data for updating an existing user. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateUser {
    /// The user ID to update.
    pub id: Uuid,
    /// New full name.
    pub full_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New pre-hashed password.
    pub password_hash: Option<String>,
}
