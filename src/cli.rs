use clap::{Parser, Subcommand};

use crate::{config::EnvConfig, constants::DEFAULT_NETWORK_NAME, logging::LogArgs};

/// CLI arguments for the singleton factory deployment tool
#[derive(Parser, Debug)]
#[command(
    name = "singleton-deploy",
    about = "Resolve deterministic singleton factory deployments across EVM chains"
)]
pub struct Cli {
    /// Environment-backed project settings
    #[command(flatten)]
    pub env: EnvConfig,

    /// Logging options
    #[command(flatten)]
    pub log: LogArgs,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the factory bootstrap parameters for a chain
    Resolve {
        /// Chain id to resolve
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        chain_id: u64,

        /// Print JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// List every registered bootstrap record
    Registry {
        /// Print JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// Decode and verify every registered bootstrap transaction
    Check,

    /// Select a network and print its configuration and deployment plan
    Network {
        /// Network name
        #[arg(long, default_value = DEFAULT_NETWORK_NAME)]
        network: String,

        /// Override a network setting, e.g. `--set gasPrice=50000000000`.
        /// Keys: url, chainId, gasPrice, live, saveDeployments.
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,

        /// Chain id for networks whose id is only known by their RPC endpoint
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        chain_id: Option<u64>,

        /// Print JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// List selectable network names
    Networks,

    /// Print project paths, compilers and toggles
    Config {
        /// Print JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },
}
