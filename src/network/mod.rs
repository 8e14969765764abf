//! Network Selector
//!
//! Maps a network name to its chain id, RPC endpoint and credentials, layers
//! per-network overrides on top, and asks the configured deployment strategy
//! how contracts should be deployed there.

pub mod errors;
pub mod overrides;
mod table;

pub use errors::NetworkError;
pub use overrides::NetworkOverrides;
pub use table::{LocalChainSettings, NetworkEntry, RpcEndpoint};

use alloy_primitives::Address;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{debug, info};

use crate::{
    config::EnvConfig,
    constants::CUSTOM_NETWORK_NAME,
    credentials::Accounts,
    deployment::{strategy_for, DeploymentPlan, DeploymentStrategy},
};
use table::NETWORKS;

/// Built-in network definitions
pub fn builtin_networks() -> &'static [NetworkEntry] {
    &NETWORKS
}

/// Built-in network by name
pub fn builtin_network(name: &str) -> Option<&'static NetworkEntry> {
    NETWORKS.iter().find(|entry| entry.name == name)
}

/// Hide the project key of an Infura URL
pub fn redact_url(url: &str) -> String {
    match url.split_once("infura.io/v3/") {
        Some((host, key)) if !key.is_empty() => format!("{host}infura.io/v3/***"),
        _ => url.to_string(),
    }
}

fn serialize_redacted_url<S: Serializer>(url: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match url {
        Some(url) => serializer.serialize_some(&redact_url(url)),
        None => serializer.serialize_none(),
    }
}

/// Fully resolved network configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedNetwork {
    /// Network name
    pub name: String,
    /// Chain id, `None` if only the RPC endpoint knows it
    pub chain_id: Option<u64>,
    /// JSON-RPC endpoint, `None` for the in-process chain. Serialized with the Infura key hidden.
    #[serde(serialize_with = "serialize_redacted_url")]
    pub url: Option<String>,
    /// Credential bundle, `None` when the chain brings its own accounts
    #[serde(skip)]
    pub accounts: Option<Accounts>,
    /// Address of the named `deployer` account
    pub deployer: Option<Address>,
    /// Fixed gas price in wei
    pub gas_price: Option<u128>,
    /// Live network
    pub live: bool,
    /// Persist deployment records
    pub save_deployments: bool,
    /// Dev chain settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<LocalChainSettings>,
    /// Strategy the plan was produced by
    pub strategy: &'static str,
    /// How contracts are deployed on this network
    pub plan: DeploymentPlan,
}

/// Selects networks and attaches the deployment plan
pub struct NetworkSelector {
    infura_key: Option<String>,
    node_url: Option<String>,
    accounts: Accounts,
    strategy: Box<dyn DeploymentStrategy>,
}

impl NetworkSelector {
    /// Create a selector with an explicit deployment strategy
    pub fn new(env: &EnvConfig, strategy: Box<dyn DeploymentStrategy>) -> Self {
        Self {
            infura_key: env.infura_key.clone().filter(|key| !key.is_empty()),
            node_url: env.node_url.clone().filter(|url| !url.is_empty()),
            accounts: env.accounts(),
            strategy,
        }
    }

    /// Create a selector whose strategy follows `CUSTOM_DETERMINISTIC_DEPLOYMENT`
    pub fn from_env(env: &EnvConfig) -> Self {
        Self::new(env, strategy_for(env.deterministic_deployment()))
    }

    /// Name of the active deployment strategy
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Names of every selectable network
    pub fn network_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = NETWORKS.iter().map(|entry| entry.name).collect();
        if self.node_url.is_some() {
            names.push(CUSTOM_NETWORK_NAME);
        }
        names
    }

    /// Resolve `name` into a full network configuration
    pub fn select(
        &self,
        name: &str,
        overrides: &NetworkOverrides,
    ) -> Result<SelectedNetwork, NetworkError> {
        let mut network = self.base_network(name)?;

        if !overrides.is_empty() {
            debug!(target: "singleton_deploy::network", network = name, "applying network overrides");
        }

        if let Some(url) = &overrides.url {
            network.url = Some(url.clone());
        }
        network.chain_id = overrides.chain_id.or(network.chain_id);
        network.gas_price = overrides.gas_price.or(network.gas_price);
        network.live = overrides.live.unwrap_or(network.live);
        network.save_deployments = overrides.save_deployments.unwrap_or(network.save_deployments);

        if let Some(accounts) = &network.accounts {
            network.deployer = Some(accounts.deployer_address()?);
        }

        network.plan = match network.chain_id {
            Some(chain_id) => self.strategy.plan(chain_id)?,
            None => {
                debug!(target: "singleton_deploy::network", network = name, "chain id unknown, using standard deployment");
                DeploymentPlan::Standard
            }
        };

        info!(
            target: "singleton_deploy::network",
            network = %network.name,
            chain_id = ?network.chain_id,
            strategy = network.strategy,
            deterministic = network.plan.is_deterministic(),
            "selected network"
        );

        Ok(network)
    }

    fn base_network(&self, name: &str) -> Result<SelectedNetwork, NetworkError> {
        if name == CUSTOM_NETWORK_NAME {
            let url = self
                .node_url
                .clone()
                .ok_or_else(|| NetworkError::UnknownNetwork { name: name.to_string() })?;
            return Ok(SelectedNetwork {
                name: name.to_string(),
                chain_id: None,
                url: Some(url),
                accounts: Some(self.accounts.clone()),
                deployer: None,
                gas_price: None,
                live: true,
                save_deployments: true,
                local: None,
                strategy: self.strategy.name(),
                plan: DeploymentPlan::Standard,
            });
        }

        let entry = builtin_network(name)
            .ok_or_else(|| NetworkError::UnknownNetwork { name: name.to_string() })?;

        let url = match entry.rpc {
            RpcEndpoint::InProcess => None,
            RpcEndpoint::Url(url) => Some(url.to_string()),
            RpcEndpoint::Infura(subdomain) => {
                let key = self
                    .infura_key
                    .as_deref()
                    .ok_or_else(|| NetworkError::MissingInfuraKey { network: name.to_string() })?;
                Some(format!("https://{subdomain}.infura.io/v3/{key}"))
            }
        };

        // The in-process chain brings its own funded accounts
        let accounts = entry.local.is_none().then(|| self.accounts.clone());

        Ok(SelectedNetwork {
            name: entry.name.to_string(),
            chain_id: Some(entry.chain_id),
            url,
            accounts,
            deployer: None,
            gas_price: entry.gas_price,
            live: entry.live,
            save_deployments: entry.save_deployments,
            local: entry.local,
            strategy: self.strategy.name(),
            plan: DeploymentPlan::Standard,
        })
    }
}

impl fmt::Debug for NetworkSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkSelector")
            .field("infura_key", &self.infura_key.as_ref().map(|_| "<redacted>"))
            .field("node_url", &self.node_url)
            .field("accounts", &self.accounts)
            .field("strategy", &self.strategy)
            .finish()
    }
}
