use serde::Serialize;
use std::str::FromStr;

use super::NetworkError;

/// Per-network settings layered over the built-in table.
///
/// Keys follow the toolchain's network config names (`url`, `chainId`,
/// `gasPrice`, `live`, `saveDeployments`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkOverrides {
    /// RPC endpoint
    pub url: Option<String>,
    /// Chain id
    pub chain_id: Option<u64>,
    /// Fixed gas price in wei
    pub gas_price: Option<u128>,
    /// Whether the network is a live network
    pub live: Option<bool>,
    /// Whether deployment records are persisted
    pub save_deployments: Option<bool>,
}

impl NetworkOverrides {
    /// Set one override from a `key`/`value` pair
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), NetworkError> {
        match key {
            "url" => self.url = Some(value.to_string()),
            "chainId" | "chain_id" => self.chain_id = Some(parse(key, value)?),
            "gasPrice" | "gas_price" => self.gas_price = Some(parse(key, value)?),
            "live" => self.live = Some(parse(key, value)?),
            "saveDeployments" | "save_deployments" => self.save_deployments = Some(parse(key, value)?),
            _ => {
                return Err(NetworkError::InvalidOverride {
                    key: key.to_string(),
                    value: value.to_string(),
                    reason: "unknown key".to_string(),
                })
            }
        }
        Ok(())
    }

    /// Parse `key=value` pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = &'a str>) -> Result<Self, NetworkError> {
        let mut overrides = Self::default();
        for pair in pairs {
            let (key, value) = pair.split_once('=').ok_or_else(|| NetworkError::InvalidOverride {
                key: pair.to_string(),
                value: String::new(),
                reason: "expected key=value".to_string(),
            })?;
            overrides.set(key.trim(), value.trim())?;
        }
        Ok(overrides)
    }

    /// Layer `other` on top of `self`; values set in `other` win
    pub fn merge(mut self, other: &Self) -> Self {
        if other.url.is_some() {
            self.url.clone_from(&other.url);
        }
        self.chain_id = other.chain_id.or(self.chain_id);
        self.gas_price = other.gas_price.or(self.gas_price);
        self.live = other.live.or(self.live);
        self.save_deployments = other.save_deployments.or(self.save_deployments);
        self
    }

    /// Returns true if no override is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T, NetworkError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| NetworkError::InvalidOverride {
        key: key.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}
