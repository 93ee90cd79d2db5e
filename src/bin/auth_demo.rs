/// Example demonstrating the credential store end to end.
///
/// Registers a user, logs in with the right and the wrong password, and
/// shows the duplicate-registration rejection. Select the backend with
/// `auth.backend` in the settings file ("real" or "fake").
use gatehouse::application_impl::{BcryptHasher, CredentialStore, FakeAuthService};
use gatehouse::application_port::AuthService;
use gatehouse::logger::*;
use gatehouse::settings::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    let logger_config = LogConfig {
        filter: project_settings.log.filter.clone(),
    };
    logger.reload_from_config(&logger_config)?;

    let auth: Arc<dyn AuthService> = match project_settings.auth.backend.as_str() {
        "real" => Arc::new(CredentialStore::new(Arc::new(BcryptHasher::new()))),
        "fake" => Arc::new(FakeAuthService::new()),
        other => return Err(anyhow::anyhow!("unknown auth backend: {other}")),
    };

    auth.register("alice", "secret1").await?;
    info!("registered alice");

    let token = auth.login("alice", "secret1").await?;
    info!(%token, "login succeeded");

    match auth.login("alice", "wrong").await {
        Ok(token) => info!(%token, "login succeeded"),
        Err(e) => warn!(error = %e, "login rejected"),
    }

    match auth.register("alice", "other").await {
        Ok(()) => info!("re-registered alice"),
        Err(e) => warn!(error = %e, "registration rejected"),
    }

    Ok(())
}
