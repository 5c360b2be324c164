//! Authentication service: register and login flows issuing bearer tokens

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use catalog_security::password::{IdentityError, PasswordService};
use catalog_security::TokenIssuer;

use crate::domain::{LoginUser, RegisterUser, User};
use crate::error::DomainError;
use crate::repositories::UserRepository;

/// Register/login orchestration. No session is persisted: a successful sign-in
/// only returns a signed token.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenIssuer>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenIssuer>) -> Self {
        Self { users, tokens }
    }

    /// Register a new user and issue a token. Callers validate the payload
    /// fields first; this flow applies the password policy and the
    /// unique-username rule, returning every broken rule at once.
    pub async fn register(&self, payload: &RegisterUser) -> Result<String, DomainError> {
        let username = payload.username.as_deref().unwrap_or_default();
        let email = payload.email.as_deref().unwrap_or_default();
        let password = payload.password.as_deref().unwrap_or_default();

        info!("Registration attempt for username: {}", username);

        let mut errors = PasswordService::check_policy(password);

        if self.users.find_by_username(username).await?.is_some() {
            errors.push(IdentityError::new(
                "DuplicateUserName",
                format!("Username '{}' is already taken.", username),
            ));
        }

        if !errors.is_empty() {
            warn!("Registration failed for {}: {} error(s)", username, errors.len());
            return Err(DomainError::IdentityErrors(errors));
        }

        let password_hash = PasswordService::hash(password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        let user = User::new(username.to_string(), email.to_string(), password_hash);
        self.users.create(&user).await?;

        let token = self
            .tokens
            .issue(username)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        info!("Registration successful for: {}", username);
        Ok(token)
    }

    /// Verify credentials and issue a token, tracking failed-attempt lockout.
    /// Unknown username and wrong password are indistinguishable to the
    /// caller.
    pub async fn login(&self, payload: &LoginUser) -> Result<String, DomainError> {
        let username = payload.username.as_deref().unwrap_or_default();
        let password = payload.password.as_deref().unwrap_or_default();

        info!("Login attempt for username: {}", username);

        let user = self.users.find_by_username(username).await?.ok_or_else(|| {
            warn!("Login failed: unknown username");
            DomainError::InvalidCredentials
        })?;

        let now = Utc::now();
        if user.is_locked_out(now) {
            warn!("Login rejected: account locked: {}", username);
            return Err(DomainError::UserLockedOut);
        }

        let password_valid = PasswordService::verify(password, &user.password_hash)
            .map_err(|_| DomainError::InvalidCredentials)?;

        if !password_valid {
            let mut updated = user.clone();
            let now_locked = updated.record_access_failure(now);
            if let Err(e) = self.users.update(&updated).await {
                error!("Failed to record login failure: {}", e);
            }
            warn!("Login failed: invalid password for: {}", username);
            return if now_locked {
                Err(DomainError::UserLockedOut)
            } else {
                Err(DomainError::InvalidCredentials)
            };
        }

        if user.failed_login_attempts > 0 || user.lockout_end.is_some() {
            let mut updated = user.clone();
            updated.reset_access_failures();
            if let Err(e) = self.users.update(&updated).await {
                error!("Failed to reset login failures: {}", e);
            }
        }

        let token = self
            .tokens
            .issue(username)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        info!("Login successful for: {}", username);
        Ok(token)
    }
}
