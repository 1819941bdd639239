//! Request DTOs.
//!
//! Fields are optional so the validators can report missing fields with a
//! message naming the field, instead of a deserialization failure.

use serde::Deserialize;

use eventhub_entity::user::{LoginInput, RegisterUserInput, UpdateUserInput};

/// POST /api/auth/register body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<RegisterRequest> for RegisterUserInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            full_name: req.full_name,
            email: req.email,
            password: req.password,
        }
    }
}

/// POST /api/auth/login body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<LoginRequest> for LoginInput {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

/// PUT /api/auth/user/{id} body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUserInput {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            full_name: req.full_name,
            email: req.email,
            password: req.password,
        }
    }
}
