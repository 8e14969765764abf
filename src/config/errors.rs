use thiserror::Error;

/// Errors raised while loading project configuration or credentials
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `SOLIDITY_SETTINGS` is not valid JSON
    #[error("Invalid SOLIDITY_SETTINGS: {0}")]
    InvalidSoliditySettings(#[source] serde_json::Error),

    /// `SOLIDITY_SETTINGS` parsed but is not a JSON object
    #[error("Invalid SOLIDITY_SETTINGS: expected a JSON object")]
    SoliditySettingsNotObject,

    /// Invalid private key format
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Mnemonic could not be turned into a signer
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// Only a fixed set of private keys is configured
    #[error("No account at index {index}: {available} private key(s) configured")]
    AccountIndexOutOfRange {
        /// Requested account index
        index: u32,
        /// Number of configured private keys
        available: usize,
    },
}
