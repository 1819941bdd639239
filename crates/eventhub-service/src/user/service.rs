//! User credential lifecycle and account management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use eventhub_auth::{JwtEncoder, PasswordHasher, PolicyEvaluator, ResourceAction};
use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_database::repositories::UserStore;
use eventhub_entity::user::{
    CreateUser, LoginInput, RegisterUserInput, UpdateUser, UpdateUserInput, User, UserRole,
};
use eventhub_entity::validation::first_violation;

use crate::context::RequestContext;

/// Handles registration, login, and account administration.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User store.
    user_repo: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
    /// Access policy evaluator.
    policy: PolicyEvaluator,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
            policy: PolicyEvaluator::new(),
        }
    }

    /// Register a new account. New accounts always get the Participant
    /// role; organizers are provisioned out of band.
    pub async fn register(&self, input: RegisterUserInput) -> AppResult<User> {
        let accepted = input.validate().map_err(first_violation)?;

        if self
            .user_repo
            .find_by_email(&accepted.email)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("User already registered"));
        }

        let password_hash = self.hasher.hash_password(&accepted.password)?;
        let user = self
            .user_repo
            .create(CreateUser {
                full_name: accepted.full_name,
                email: accepted.email,
                password_hash,
                role: UserRole::Participant,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Authenticate by email and password, issuing a signed token.
    ///
    /// Unknown email and wrong password fail with the same message so the
    /// response does not reveal which part was wrong.
    pub async fn login(&self, input: LoginInput) -> AppResult<(User, String)> {
        let credentials = input.validate().map_err(first_violation)?;

        let user = self
            .user_repo
            .find_by_email(&credentials.email)
            .await?
            .ok_or_else(|| AppError::validation("Invalid email or password"))?;

        let matches = self
            .hasher
            .verify_password(&credentials.password, &user.password_hash)?;
        if !matches {
            return Err(AppError::validation("Invalid email or password"));
        }

        let token = self.encoder.generate_token(user.id, user.role)?;

        info!(user_id = %user.id, "User logged in");
        Ok((user, token))
    }

    /// Stateless logout acknowledgement; tokens carry their own expiry.
    pub fn logout(&self, ctx: &RequestContext, user_id: Uuid) -> AppResult<()> {
        self.policy
            .authorize(&ctx.identity(), ResourceAction::WriteOwn, Some(user_id))?;
        info!(user_id = %user_id, "User logged out");
        Ok(())
    }

    /// Update an account. Participants may only update themselves;
    /// organizers may update anyone.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        input: UpdateUserInput,
    ) -> AppResult<User> {
        self.policy
            .authorize(&ctx.identity(), ResourceAction::WriteOwn, Some(user_id))?;

        let patch = input.validate().map_err(first_violation)?;

        if let Some(ref email) = patch.email {
            if let Some(existing) = self.user_repo.find_by_email(email).await? {
                if existing.id != user_id {
                    return Err(AppError::conflict("Email is already in use"));
                }
            }
        }

        let password_hash = match patch.password {
            Some(ref password) => Some(self.hasher.hash_password(password)?),
            None => None,
        };

        let updated = self
            .user_repo
            .update(UpdateUser {
                id: user_id,
                full_name: patch.full_name,
                email: patch.email,
                password_hash,
            })
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = %user_id, "User updated");
        Ok(updated)
    }

    /// List every account. Organizer-only.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<User>> {
        self.policy.require_organizer(&ctx.identity())?;
        self.user_repo.find_all().await
    }

    /// Fetch one account by ID. Organizer-only.
    pub async fn get(&self, ctx: &RequestContext, user_id: Uuid) -> AppResult<User> {
        self.policy.require_organizer(&ctx.identity())?;
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Delete an account. Organizer-only.
    pub async fn delete(&self, ctx: &RequestContext, user_id: Uuid) -> AppResult<()> {
        self.policy.require_organizer(&ctx.identity())?;

        let removed = self.user_repo.delete(user_id).await?;
        if !removed {
            return Err(AppError::not_found("User not found"));
        }

        info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use eventhub_core::config::AuthConfig;
    use eventhub_core::error::ErrorKind;

    #[derive(Debug, Default)]
    struct InMemoryUsers {
        users: Mutex<Vec<User>>,
    }

    impl InMemoryUsers {
        fn with(users: Vec<User>) -> Arc<Self> {
            Arc::new(Self {
                users: Mutex::new(users),
            })
        }
    }

    #[async_trait]
    impl UserStore for InMemoryUsers {
        async fn create(&self, input: CreateUser) -> AppResult<User> {
            let user = User {
                id: Uuid::new_v4(),
                full_name: input.full_name,
                email: input.email,
                password_hash: input.password_hash,
                role: input.role,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
            Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
        }
        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email.eq_ignore_ascii_case(email))
                .cloned())
        }
        async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .filter(|u| ids.contains(&u.id))
                .cloned()
                .collect())
        }
        async fn find_all(&self) -> AppResult<Vec<User>> {
            Ok(self.users.lock().unwrap().clone())
        }
        async fn update(&self, input: UpdateUser) -> AppResult<Option<User>> {
            let mut users = self.users.lock().unwrap();
            let Some(user) = users.iter_mut().find(|u| u.id == input.id) else {
                return Ok(None);
            };
            if let Some(full_name) = input.full_name {
                user.full_name = full_name;
            }
            if let Some(email) = input.email {
                user.email = email;
            }
            if let Some(hash) = input.password_hash {
                user.password_hash = hash;
            }
            Ok(Some(user.clone()))
        }
        async fn delete(&self, id: Uuid) -> AppResult<bool> {
            let mut users = self.users.lock().unwrap();
            let before = users.len();
            users.retain(|u| u.id != id);
            Ok(users.len() != before)
        }
    }

    fn service_with(users: Arc<InMemoryUsers>) -> UserService {
        let config = AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            token_ttl_hours: 24,
        };
        UserService::new(
            users,
            Arc::new(PasswordHasher::new()),
            Arc::new(JwtEncoder::new(&config)),
        )
    }

    fn alice(password_hash: String) -> User {
        User {
            id: Uuid::new_v4(),
            full_name: "Alice Example".to_string(),
            email: "alice@example.com".to_string(),
            password_hash,
            role: UserRole::Participant,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn login_input(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    // Unknown email and wrong password must be indistinguishable to the
    // caller.
    #[tokio::test]
    async fn test_login_failure_does_not_reveal_which_part_was_wrong() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("Sup3rSecret").unwrap();
        let service = service_with(InMemoryUsers::with(vec![alice(hash)]));

        let unknown_email = service
            .login(login_input("nobody@example.com", "Sup3rSecret"))
            .await
            .unwrap_err();
        let wrong_password = service
            .login(login_input("alice@example.com", "WrongPassw0rd"))
            .await
            .unwrap_err();

        assert_eq!(unknown_email.message, "Invalid email or password");
        assert_eq!(unknown_email.message, wrong_password.message);
        assert_eq!(unknown_email.kind, wrong_password.kind);
    }

    #[tokio::test]
    async fn test_login_with_correct_credentials_issues_token() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("Sup3rSecret").unwrap();
        let service = service_with(InMemoryUsers::with(vec![alice(hash)]));

        let (user, token) = service
            .login(login_input("alice@example.com", "Sup3rSecret"))
            .await
            .unwrap();

        assert_eq!(user.email, "alice@example.com");
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("Sup3rSecret").unwrap();
        let service = service_with(InMemoryUsers::with(vec![alice(hash)]));

        let err = service
            .register(RegisterUserInput {
                full_name: Some("Alice Again".to_string()),
                email: Some("ALICE@example.com".to_string()),
                password: Some("An0therSecret".to_string()),
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "User already registered");
    }

    #[tokio::test]
    async fn test_register_always_assigns_participant_role() {
        let service = service_with(InMemoryUsers::with(vec![]));

        let user = service
            .register(RegisterUserInput {
                full_name: Some("Bob Martin".to_string()),
                email: Some("bob@example.com".to_string()),
                password: Some("Sup3rSecret".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(user.role, UserRole::Participant);
    }
}
