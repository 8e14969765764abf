//! Deployment strategy selection.
//!
//! Whether the singleton factory is bootstrapped from the registry is decided
//! once, when the network selector is built, by picking a strategy. The
//! resolver itself never looks at configuration flags.

use serde::Serialize;
use tracing::{info, warn};

use crate::resolver::{self, DeploymentDescriptor, ResolveError};

/// How contracts get onto a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "descriptor", rename_all = "camelCase")]
pub enum DeploymentPlan {
    /// Bootstrap the singleton factory with a pre-signed transaction first
    Deterministic(DeploymentDescriptor),
    /// Use the network's ordinary contract creation path
    Standard,
}

impl DeploymentPlan {
    /// Returns the descriptor for deterministic plans
    pub fn descriptor(&self) -> Option<&DeploymentDescriptor> {
        match self {
            Self::Deterministic(descriptor) => Some(descriptor),
            Self::Standard => None,
        }
    }

    /// Returns true if the factory will be bootstrapped from the registry
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Self::Deterministic(_))
    }
}

/// Decides the deployment plan for a chain
pub trait DeploymentStrategy: std::fmt::Debug + Send + Sync {
    /// Plan the deployment for `chain_id`
    fn plan(&self, chain_id: u64) -> Result<DeploymentPlan, ResolveError>;

    /// Short name for logs and output
    fn name(&self) -> &'static str;
}

/// Bootstraps the singleton factory from the registry when the chain has a
/// record, and falls back to the standard path when it does not.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryFactory;

impl DeploymentStrategy for RegistryFactory {
    fn plan(&self, chain_id: u64) -> Result<DeploymentPlan, ResolveError> {
        match resolver::resolve(chain_id)? {
            Some(descriptor) => {
                info!(
                    target: "singleton_deploy::deployment",
                    chain_id,
                    factory = %descriptor.factory_address,
                    "using deterministic factory bootstrap"
                );
                Ok(DeploymentPlan::Deterministic(descriptor))
            }
            None => {
                warn!(
                    target: "singleton_deploy::deployment",
                    chain_id,
                    "no bootstrap record for chain, falling back to standard deployment"
                );
                Ok(DeploymentPlan::Standard)
            }
        }
    }

    fn name(&self) -> &'static str {
        "registry-factory"
    }
}

/// Always deploys through the standard creation path
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCreation;

impl DeploymentStrategy for DefaultCreation {
    fn plan(&self, _chain_id: u64) -> Result<DeploymentPlan, ResolveError> {
        Ok(DeploymentPlan::Standard)
    }

    fn name(&self) -> &'static str {
        "default-creation"
    }
}

/// Strategy for the custom deterministic deployment toggle
pub fn strategy_for(deterministic: bool) -> Box<dyn DeploymentStrategy> {
    if deterministic {
        Box::new(RegistryFactory)
    } else {
        Box::new(DefaultCreation)
    }
}
