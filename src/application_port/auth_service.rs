use serde::Serialize;
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("username and password cannot be empty")]
    InvalidInput,
    #[error("username already exists")]
    DuplicateUser,
    #[error("password hashing failed: {0}")]
    HashingFailure(String),
    #[error("this user does not exist")]
    UnknownUser,
    #[error("invalid password")]
    InvalidCredential,
}

/// Opaque session marker issued on successful login.
///
/// This is a plain identity string, not a signed credential; callers must
/// not treat it as tamper-proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[async_trait::async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, AuthError>;
    async fn verify_password(&self, password: &str, password_hash: &str)
    -> Result<bool, AuthError>;
}

#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    async fn register(&self, username: &str, password: &str) -> Result<(), AuthError>;
    async fn login(&self, username: &str, password: &str) -> Result<SessionToken, AuthError>;
}
