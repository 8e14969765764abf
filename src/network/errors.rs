use thiserror::Error;

use crate::{config::ConfigError, resolver::ResolveError};

/// Errors raised while selecting a network
#[derive(Debug, Error)]
pub enum NetworkError {
    /// No network with that name is configured
    #[error("Unknown network {name:?}")]
    UnknownNetwork {
        /// Requested network name
        name: String,
    },

    /// The network's RPC endpoint is hosted on Infura and no key is set
    #[error("Could not find Infura key in env, unable to connect to network {network}")]
    MissingInfuraKey {
        /// Network that needs the key
        network: String,
    },

    /// An override key is unknown or its value cannot be parsed
    #[error("Invalid network override {key}={value:?}: {reason}")]
    InvalidOverride {
        /// Override key
        key: String,
        /// Raw override value
        value: String,
        /// What went wrong
        reason: String,
    },

    /// Credentials could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The chain has a bootstrap record that cannot be used
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
