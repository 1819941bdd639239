//! Typed input validators for user operations.
//!
//! Each operation has its own schema object (register, login, update).
//! `validate()` consumes the raw input and produces either the accepted
//! value or an ordered list of field violations.

use validator::ValidateEmail;

use crate::validation::{FieldViolation, check_length};

const NAME_MIN: usize = 5;
const NAME_MAX: usize = 100;
const EMAIL_MIN: usize = 5;
const EMAIL_MAX: usize = 100;
const PASSWORD_MIN: usize = 8;

/// Raw registration payload before validation.
#[derive(Debug, Clone, Default)]
pub struct RegisterUserInput {
    /// Full name.
    pub full_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Accepted registration payload.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    /// Full name, trimmed.
    pub full_name: String,
    /// Email address, trimmed.
    pub email: String,
    /// Plaintext password (hashed by the service before storage).
    pub password: String,
}

impl RegisterUserInput {
    /// Validate the registration payload.
    pub fn validate(self) -> Result<RegisterUser, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let full_name = required_trimmed("fullName", self.full_name, &mut violations);
        if let Some(ref name) = full_name {
            if let Some(v) = check_length("fullName", name, NAME_MIN, NAME_MAX) {
                violations.push(v);
            }
        }

        let email = required_trimmed("email", self.email, &mut violations);
        if let Some(ref email) = email {
            if let Some(v) = check_email(email) {
                violations.push(v);
            }
        }

        let password = required_trimmed("password", self.password, &mut violations);
        if let Some(ref password) = password {
            if let Some(v) = check_password_complexity(password) {
                violations.push(v);
            }
        }

        if violations.is_empty() {
            Ok(RegisterUser {
                full_name: full_name.unwrap_or_default(),
                email: email.unwrap_or_default(),
                password: password.unwrap_or_default(),
            })
        } else {
            Err(violations)
        }
    }
}

/// Raw login payload before validation.
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Accepted login payload.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    /// Email address, trimmed.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

impl LoginInput {
    /// Validate the login payload.
    pub fn validate(self) -> Result<LoginCredentials, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let email = required_trimmed("email", self.email, &mut violations);
        if let Some(ref email) = email {
            if let Some(v) = check_email(email) {
                violations.push(v);
            }
        }

        let password = required_trimmed("password", self.password, &mut violations);

        if violations.is_empty() {
            Ok(LoginCredentials {
                email: email.unwrap_or_default(),
                password: password.unwrap_or_default(),
            })
        } else {
            Err(violations)
        }
    }
}

/// Raw self-service update payload before validation.
///
/// All fields are optional, but a present field must still satisfy the
/// same bounds as at registration.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    /// New full name.
    pub full_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
}

/// Accepted update payload. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UserPatch {
    /// New full name.
    pub full_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
}

impl UpdateUserInput {
    /// Validate the update payload.
    pub fn validate(self) -> Result<UserPatch, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let full_name = self.full_name.map(|s| s.trim().to_string());
        if let Some(ref name) = full_name {
            if let Some(v) = check_length("fullName", name, NAME_MIN, NAME_MAX) {
                violations.push(v);
            }
        }

        let email = self.email.map(|s| s.trim().to_string());
        if let Some(ref email) = email {
            if let Some(v) = check_email(email) {
                violations.push(v);
            }
        }

        let password = self.password.map(|s| s.trim().to_string());
        if let Some(ref password) = password {
            if let Some(v) = check_password_complexity(password) {
                violations.push(v);
            }
        }

        if violations.is_empty() {
            Ok(UserPatch {
                full_name,
                email,
                password,
            })
        } else {
            Err(violations)
        }
    }
}

fn required_trimmed(
    field: &'static str,
    value: Option<String>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value.map(|s| s.trim().to_string()) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            violations.push(FieldViolation::required(field));
            None
        }
    }
}

fn check_email(email: &str) -> Option<FieldViolation> {
    if let Some(v) = check_length("email", email, EMAIL_MIN, EMAIL_MAX) {
        return Some(v);
    }
    if !email.validate_email() {
        return Some(FieldViolation::new(
            "email",
            "\"email\" must be a valid email address",
        ));
    }
    None
}

/// Password policy: minimum length plus upper/lower/digit classes.
fn check_password_complexity(password: &str) -> Option<FieldViolation> {
    if password.chars().count() < PASSWORD_MIN {
        return Some(FieldViolation::new(
            "password",
            format!("\"password\" must be at least {PASSWORD_MIN} characters"),
        ));
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Some(FieldViolation::new(
            "password",
            "\"password\" must contain at least one uppercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Some(FieldViolation::new(
            "password",
            "\"password\" must contain at least one lowercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some(FieldViolation::new(
            "password",
            "\"password\" must contain at least one digit",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register() -> RegisterUserInput {
        RegisterUserInput {
            full_name: Some("Alice Example".to_string()),
            email: Some("alice@example.com".to_string()),
            password: Some("Sup3rSecret".to_string()),
        }
    }

    #[test]
    fn test_valid_registration_accepted() {
        let accepted = valid_register().validate().expect("should validate");
        assert_eq!(accepted.email, "alice@example.com");
    }

    #[test]
    fn test_missing_email_names_field() {
        let mut input = valid_register();
        input.email = None;
        let violations = input.validate().unwrap_err();
        assert!(violations.iter().any(|v| v.message.contains("email")));
    }

    #[test]
    fn test_missing_password_names_field() {
        let mut input = valid_register();
        input.password = None;
        let violations = input.validate().unwrap_err();
        assert!(violations.iter().any(|v| v.message.contains("password")));
    }

    #[test]
    fn test_bad_email_format_rejected() {
        let mut input = valid_register();
        input.email = Some("not-an-email".to_string());
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_weak_password_rejected() {
        for weak in ["short1A", "alllowercase1", "ALLUPPERCASE1", "NoDigitsHere"] {
            let mut input = valid_register();
            input.password = Some(weak.to_string());
            assert!(input.validate().is_err(), "password '{weak}' should fail");
        }
    }

    #[test]
    fn test_update_all_absent_is_valid() {
        let patch = UpdateUserInput::default().validate().expect("empty patch");
        assert!(patch.full_name.is_none());
    }

    #[test]
    fn test_update_present_but_short_name_rejected() {
        let input = UpdateUserInput {
            full_name: Some("ab".to_string()),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let violations = LoginInput::default().validate().unwrap_err();
        assert!(violations.iter().any(|v| v.field == "email"));
        assert!(violations.iter().any(|v| v.field == "password"));
    }
}
