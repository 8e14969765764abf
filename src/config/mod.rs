//! Project configuration loaded from the environment.

pub mod errors;

pub use errors::ConfigError;

use clap::Args;
use serde::Serialize;
use serde_json::{Map, Value};
use std::{fmt, path::PathBuf};

use crate::{
    constants::{DEFAULT_SOLIDITY_VERSION, LEGACY_SOLIDITY_VERSIONS},
    credentials::Accounts,
};

/// Settings read from environment variables (or the equivalent flags)
#[derive(Clone, Default, Args)]
pub struct EnvConfig {
    /// RPC URL of an extra network exposed as `custom`
    #[arg(long, env = "NODE_URL", global = true)]
    pub node_url: Option<String>,

    /// Infura project key used by the Infura-hosted networks
    #[arg(long, env = "INFURA_KEY", hide_env_values = true, global = true)]
    pub infura_key: Option<String>,

    /// BIP-39 mnemonic for deployment accounts
    #[arg(long, env = "MNEMONIC", hide_env_values = true, global = true)]
    pub mnemonic: Option<String>,

    /// Private key for the deployment account, takes precedence over the mnemonic
    #[arg(long = "pk", env = "PK", hide_env_values = true, global = true)]
    pub private_key: Option<String>,

    /// Block explorer API key used by contract verification
    #[arg(long, env = "ETHERSCAN_API_KEY", hide_env_values = true, global = true)]
    pub etherscan_api_key: Option<String>,

    /// Primary Solidity compiler version
    #[arg(long, env = "SOLIDITY_VERSION", global = true)]
    pub solidity_version: Option<String>,

    /// JSON compiler settings for the primary compiler
    #[arg(long, env = "SOLIDITY_SETTINGS", global = true)]
    pub solidity_settings: Option<String>,

    /// Bootstrap the singleton factory from pre-signed transactions.
    /// Only the literal value `true` enables it.
    #[arg(long, env = "CUSTOM_DETERMINISTIC_DEPLOYMENT", global = true)]
    pub custom_deterministic_deployment: Option<String>,
}

impl EnvConfig {
    /// Whether the custom deterministic deployment toggle is on
    pub fn deterministic_deployment(&self) -> bool {
        self.custom_deterministic_deployment.as_deref() == Some("true")
    }

    /// Shared credential bundle for remote networks
    pub fn accounts(&self) -> Accounts {
        Accounts::from_env(self.private_key.as_deref(), self.mnemonic.as_deref())
    }
}

impl fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &Option<String>) -> Option<&'static str> {
            value.as_ref().map(|_| "<redacted>")
        }

        f.debug_struct("EnvConfig")
            .field("node_url", &self.node_url)
            .field("infura_key", &redact(&self.infura_key))
            .field("mnemonic", &redact(&self.mnemonic))
            .field("private_key", &redact(&self.private_key))
            .field("etherscan_api_key", &redact(&self.etherscan_api_key))
            .field("solidity_version", &self.solidity_version)
            .field("solidity_settings", &self.solidity_settings)
            .field("custom_deterministic_deployment", &self.custom_deterministic_deployment)
            .finish()
    }
}

/// One compiler entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompilerConfig {
    /// Compiler version, e.g. `0.7.6`
    pub version: String,
    /// Raw solc settings, passed through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Map<String, Value>>,
}

/// Compilers available to the project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolidityConfig {
    /// Primary compiler first, legacy compilers after it
    pub compilers: Vec<CompilerConfig>,
}

impl SolidityConfig {
    /// Build the compiler list from `SOLIDITY_VERSION` and `SOLIDITY_SETTINGS`
    pub fn from_env(version: Option<&str>, settings: Option<&str>) -> Result<Self, ConfigError> {
        let settings = match settings.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => match serde_json::from_str::<Value>(raw).map_err(ConfigError::InvalidSoliditySettings)? {
                Value::Object(map) => Some(map),
                _ => return Err(ConfigError::SoliditySettingsNotObject),
            },
            None => None,
        };

        let primary = CompilerConfig {
            version: version.filter(|v| !v.is_empty()).unwrap_or(DEFAULT_SOLIDITY_VERSION).to_string(),
            settings,
        };

        let compilers = std::iter::once(primary)
            .chain(
                LEGACY_SOLIDITY_VERSIONS
                    .iter()
                    .map(|version| CompilerConfig { version: version.to_string(), settings: None }),
            )
            .collect();

        Ok(Self { compilers })
    }

    /// The compiler used for the project's own sources, `None` if no compiler is configured
    pub fn primary(&self) -> Option<&CompilerConfig> {
        self.compilers.first()
    }
}

/// Project directory layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPaths {
    /// Compiled artifacts
    pub artifacts: PathBuf,
    /// Compiler cache
    pub cache: PathBuf,
    /// Deployment scripts
    pub deploy: PathBuf,
    /// Contract sources
    pub sources: PathBuf,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            artifacts: PathBuf::from("build/artifacts"),
            cache: PathBuf::from("build/cache"),
            deploy: PathBuf::from("src/deploy"),
            sources: PathBuf::from("contracts"),
        }
    }
}

/// Project wide settings that do not depend on the selected network
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Directory layout
    pub paths: ProjectPaths,
    /// Compiler selection
    pub solidity: SolidityConfig,
    /// Whether a block explorer API key is configured
    pub verification_enabled: bool,
    /// Whether the singleton factory is bootstrapped from the registry
    pub deterministic_deployment: bool,
}

impl ProjectConfig {
    /// Load the project configuration
    pub fn from_env(env: &EnvConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            paths: ProjectPaths::default(),
            solidity: SolidityConfig::from_env(
                env.solidity_version.as_deref(),
                env.solidity_settings.as_deref(),
            )?,
            verification_enabled: env.etherscan_api_key.as_deref().is_some_and(|key| !key.is_empty()),
            deterministic_deployment: env.deterministic_deployment(),
        })
    }
}
