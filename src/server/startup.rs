use std::sync::Arc;

use protocol::Service;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::AppError,
    rpc::{RpcChannel, ServiceClient},
    service::credential::{BcryptVerifier, CredentialVerifier},
};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the data and authentication services.
///
/// Opens one long-lived channel per backend using the configured addresses, timeouts and
/// not-found convention. Both connections must succeed before the gateway starts serving.
///
/// # Arguments
/// - `config` - Application configuration containing both backend addresses
///
/// # Returns
/// - `Ok((data, auth))` - Clients for the data and authentication services
/// - `Err(AppError::RpcErr(Connect))` - A backend could not be reached
pub async fn connect_services(
    config: &Config,
) -> Result<(ServiceClient, ServiceClient), AppError> {
    let data = RpcChannel::connect(Service::Data, config.data_channel()).await?;
    let auth = RpcChannel::connect(Service::Auth, config.auth_channel()).await?;

    Ok((
        ServiceClient::new(Arc::new(data), config.sentinel_policy),
        ServiceClient::new(Arc::new(auth), config.sentinel_policy),
    ))
}

/// Builds the credential verifier with the configured bcrypt cost.
pub fn setup_verifier(config: &Config) -> Arc<dyn CredentialVerifier> {
    let verifier = BcryptVerifier::new(config.hash_cost);
    tracing::info!("Hashing passwords with bcrypt cost {}", verifier.cost());

    Arc::new(verifier)
}
