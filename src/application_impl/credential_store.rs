use crate::application_port::{AuthError, AuthService, CredentialHasher, SessionToken};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Prefix of every issued session token; the remainder is the username.
pub const SESSION_TOKEN_PREFIX: &str = "session-for-";

/// In-memory credential store backing the real [`AuthService`].
///
/// Owns the username → password-hash map behind a single reader/writer
/// lock: registrations take it exclusively, logins share it. Instantiate
/// one store per service instance; independent stores do not see each
/// other's users.
pub struct CredentialStore {
    users: RwLock<HashMap<String, String>>,
    hasher: Arc<dyn CredentialHasher>,
}

impl CredentialStore {
    pub fn new(hasher: Arc<dyn CredentialHasher>) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            hasher,
        }
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    fn validate(username: &str, password: &str) -> Result<(), AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInput);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AuthService for CredentialStore {
    async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        Self::validate(username, password)?;

        // Existence check, hashing, and insert form one exclusive critical
        // section: two racing registrations of the same username cannot
        // both observe "absent".
        let mut users = self.users.write().await;

        if users.contains_key(username) {
            return Err(AuthError::DuplicateUser);
        }

        let password_hash = self.hasher.hash_password(password).await?;
        users.insert(username.to_string(), password_hash);

        debug!(username, "registered new user");
        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> Result<SessionToken, AuthError> {
        Self::validate(username, password)?;

        let users = self.users.read().await;

        let password_hash = users.get(username).ok_or(AuthError::UnknownUser)?;

        // Verifier errors fold into the same failure as a mismatch so the
        // caller cannot distinguish the two.
        match self.hasher.verify_password(password, password_hash).await {
            Ok(true) => {}
            _ => {
                warn!(username, "login rejected");
                return Err(AuthError::InvalidCredential);
            }
        }

        Ok(SessionToken(format!("{SESSION_TOKEN_PREFIX}{username}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application_impl::BcryptHasher;

    fn store() -> CredentialStore {
        // Minimum bcrypt cost keeps the tests fast.
        CredentialStore::new(Arc::new(BcryptHasher::with_cost(4)))
    }

    #[tokio::test]
    async fn register_then_login_issues_prefixed_token() {
        let auth = store();

        auth.register("alice", "secret1").await.unwrap();
        let token = auth.login("alice", "secret1").await.unwrap();

        assert_eq!(token.as_str(), "session-for-alice");
    }

    #[tokio::test]
    async fn duplicate_register_keeps_original_credentials() {
        let auth = store();

        auth.register("alice", "secret1").await.unwrap();
        let err = auth.register("alice", "other").await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUser));
        assert_eq!(err.to_string(), "username already exists");

        // First registration still wins.
        assert!(auth.login("alice", "secret1").await.is_ok());
        assert!(matches!(
            auth.login("alice", "other").await,
            Err(AuthError::InvalidCredential)
        ));
        assert_eq!(auth.user_count().await, 1);
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_rejected() {
        let auth = store();

        auth.register("alice", "secret1").await.unwrap();
        let err = auth.login("alice", "wrong").await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredential));
        assert_eq!(err.to_string(), "invalid password");
    }

    #[tokio::test]
    async fn login_for_unknown_user_is_rejected() {
        let auth = store();

        let err = auth.login("bob", "x").await.unwrap_err();

        assert!(matches!(err, AuthError::UnknownUser));
        assert_eq!(err.to_string(), "this user does not exist");
    }

    #[tokio::test]
    async fn empty_input_is_rejected_before_any_lookup() {
        let auth = store();

        for (username, password) in [("", "password123"), ("alice", ""), ("", "")] {
            let err = auth.register(username, password).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidInput));

            let err = auth.login(username, password).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidInput));
            assert_eq!(err.to_string(), "username and password cannot be empty");
        }

        assert_eq!(auth.user_count().await, 0);
    }

    #[tokio::test]
    async fn special_characters_round_trip() {
        let auth = store();

        auth.register("meti@gmail.com", "@meti##**").await.unwrap();
        let token = auth.login("meti@gmail.com", "@meti##**").await.unwrap();

        assert_eq!(token.as_str(), "session-for-meti@gmail.com");
    }
}
