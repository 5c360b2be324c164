//! Application-wide constants

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_FAILED_LOGIN_ATTEMPTS: i32 = 5;
pub const LOCKOUT_DURATION_SECS: i64 = 300;
