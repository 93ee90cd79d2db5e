use crate::application_port::{AuthError, CredentialHasher};
use bcrypt::{DEFAULT_COST, hash, verify};

/// Salted one-way password hashing via bcrypt.
///
/// Each call to [`CredentialHasher::hash_password`] draws a fresh random
/// salt; the cost factor is fixed at construction time.
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Lower costs (down to bcrypt's minimum of 4) are useful in tests.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CredentialHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        hash(password, self.cost).map_err(|e| AuthError::HashingFailure(e.to_string()))
    }

    async fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, AuthError> {
        verify(password, password_hash).map_err(|e| AuthError::HashingFailure(e.to_string()))
    }
}
