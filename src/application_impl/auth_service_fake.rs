use crate::application_port::{AuthError, AuthService, SessionToken};

#[derive(Debug)]
pub struct FakeAuthService;

impl FakeAuthService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FakeAuthService {
    fn default() -> Self {
        Self::new()
    }
}

// Minimal fake implementation for basic use only.
// Extend to simulate more error cases and configurable responses when needed.
#[async_trait::async_trait]
impl AuthService for FakeAuthService {
    async fn register(&self, _username: &str, _password: &str) -> Result<(), AuthError> {
        Ok(())
    }

    async fn login(&self, username: &str, _password: &str) -> Result<SessionToken, AuthError> {
        Ok(SessionToken(format!("fake-session:{}", username)))
    }
}
