//! User domain entity and auth request payloads

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use catalog_shared::constants::{LOCKOUT_DURATION_SECS, MAX_FAILED_LOGIN_ATTEMPTS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub failed_login_attempts: i32,
    pub lockout_end: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            failed_login_attempts: 0,
            lockout_end: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_locked_out(&self, now: DateTime<Utc>) -> bool {
        self.lockout_end.is_some_and(|end| end > now)
    }

    /// Record one failed login. Locks the account once the failure count
    /// reaches the limit; returns true when this failure triggered the lock.
    pub fn record_access_failure(&mut self, now: DateTime<Utc>) -> bool {
        self.failed_login_attempts += 1;
        if self.failed_login_attempts >= MAX_FAILED_LOGIN_ATTEMPTS {
            self.lockout_end = Some(now + Duration::seconds(LOCKOUT_DURATION_SECS));
            self.failed_login_attempts = 0;
            true
        } else {
            false
        }
    }

    pub fn reset_access_failures(&mut self) {
        self.failed_login_attempts = 0;
        self.lockout_end = None;
    }
}

/// Registration payload, not persisted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(
        required(message = "The UserName field is required."),
        length(min = 1, message = "The UserName field is required.")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "The Email field is required."),
        email(message = "The Email field is not a valid e-mail address.")
    )]
    pub email: Option<String>,

    #[validate(required(message = "The Password field is required."))]
    pub password: Option<String>,
}

/// Login payload, not persisted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginUser {
    #[validate(
        required(message = "The UserName field is required."),
        length(min = 1, message = "The UserName field is required.")
    )]
    pub username: Option<String>,

    #[validate(required(message = "The Password field is required."))]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        )
    }

    #[test]
    fn lockout_triggers_after_max_failures() {
        let mut u = user();
        let now = Utc::now();
        for _ in 0..MAX_FAILED_LOGIN_ATTEMPTS - 1 {
            assert!(!u.record_access_failure(now));
        }
        assert!(u.record_access_failure(now));
        assert!(u.is_locked_out(now));
    }

    #[test]
    fn lockout_expires() {
        let mut u = user();
        let now = Utc::now();
        for _ in 0..MAX_FAILED_LOGIN_ATTEMPTS {
            u.record_access_failure(now);
        }
        let later = now + Duration::seconds(LOCKOUT_DURATION_SECS + 1);
        assert!(!u.is_locked_out(later));
    }

    #[test]
    fn reset_clears_lockout() {
        let mut u = user();
        let now = Utc::now();
        for _ in 0..MAX_FAILED_LOGIN_ATTEMPTS {
            u.record_access_failure(now);
        }
        u.reset_access_failures();
        assert!(!u.is_locked_out(now));
        assert_eq!(u.failed_login_attempts, 0);
    }

    #[test]
    fn register_payload_requires_all_fields() {
        let payload = RegisterUser {
            username: None,
            email: None,
            password: None,
        };
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn register_payload_rejects_bad_email() {
        let payload = RegisterUser {
            username: Some("alice".to_string()),
            email: Some("not-an-email".to_string()),
            password: Some("Sup3r$ecret".to_string()),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
