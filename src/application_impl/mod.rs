mod auth_service_fake;
mod bcrypt_hasher;
mod credential_store;

pub use auth_service_fake::*;
pub use bcrypt_hasher::*;
pub use credential_store::*;
