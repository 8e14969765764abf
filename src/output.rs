//! Colored console output for the `singleton-deploy` CLI.
//!
//! Color scheme: blue+bold headers, cyan values, green success,
//! yellow warnings, dimmed secondary text.

use alloy_primitives::{utils::format_ether, U256};
use colored::Colorize;

use crate::{
    config::ProjectConfig,
    deployment::DeploymentPlan,
    network::{redact_url, SelectedNetwork},
    registry::BootstrapRecord,
    resolver::{DecodedBootstrap, DeploymentDescriptor},
};

// ── Helpers ────────────────────────────────────────────────────────

/// Format a wei amount as `"<wei> wei (<ether> ETH)"`.
pub fn format_funding(amount: U256) -> String {
    format!("{amount} wei ({} ETH)", format_ether(amount))
}

/// Shorten a long hex blob to its first and last bytes for display.
pub fn abbreviate_hex(hex: &str) -> String {
    if hex.len() <= 26 {
        return hex.to_string();
    }
    format!("{}…{} ({} bytes)", &hex[..14], &hex[hex.len() - 8..], (hex.len() - 2) / 2)
}

// ── Resolver ───────────────────────────────────────────────────────

/// Print a resolved deployment descriptor.
pub fn print_descriptor(chain_id: u64, descriptor: &DeploymentDescriptor) {
    println!();
    println!("{}", format!("=== Singleton factory bootstrap: chain {chain_id} ===").blue().bold());
    println!("  {} {}", "Factory:  ".dimmed(), descriptor.factory_address.to_string().cyan());
    println!("  {} {}", "Deployer: ".dimmed(), descriptor.deployer_address.to_string().cyan());
    println!("  {} {}", "Funding:  ".dimmed(), format_funding(descriptor.funding_amount).cyan());
    println!(
        "  {} {}",
        "Signed tx:".dimmed(),
        abbreviate_hex(&descriptor.signed_transaction.to_string()).cyan()
    );
}

/// Print that a chain has no registered bootstrap.
pub fn print_unsupported(chain_id: u64) {
    println!(
        "  {} No deterministic bootstrap available for chain {}",
        "NOTE:".yellow().bold(),
        chain_id.to_string().cyan()
    );
    println!("  {}", "Deployments fall back to the standard creation path.".dimmed());
}

// ── Registry ───────────────────────────────────────────────────────

/// Print all registry records.
pub fn print_registry(records: &[BootstrapRecord]) {
    println!();
    println!("{}", format!("Bootstrap registry ({} chains):", records.len()).blue().bold());
    for record in records {
        println!(
            "  {} gas price {} gas limit {} signer {} factory {}",
            format!("{:>8}", record.chain_id).cyan(),
            record.gas_price.to_string().cyan(),
            record.gas_limit.to_string().cyan(),
            record.signer_address.to_string().dimmed(),
            record.factory_address.to_string().dimmed(),
        );
    }
}

/// Print a record that passed validation.
pub fn print_record_ok(record: &BootstrapRecord, decoded: &DecodedBootstrap) {
    println!(
        "  {} chain {} tx {} from {}",
        "OK".green().bold(),
        record.chain_id.to_string().cyan(),
        decoded.tx_hash.to_string().dimmed(),
        decoded.sender.to_string().cyan()
    );
}

/// Print a record that failed validation.
pub fn print_record_failed(chain_id: u64, reason: &str) {
    println!("  {} chain {} {}", "FAILED".red().bold(), chain_id.to_string().cyan(), reason.red());
}

// ── Network ────────────────────────────────────────────────────────

/// Print a selected network and its deployment plan.
pub fn print_network(network: &SelectedNetwork) {
    println!();
    println!("{}", format!("=== Network: {} ===", network.name).blue().bold());
    println!(
        "  {} {}",
        "Chain ID:   ".dimmed(),
        network.chain_id.map_or_else(|| "from RPC".normal(), |id| id.to_string().cyan())
    );
    println!(
        "  {} {}",
        "RPC URL:    ".dimmed(),
        network.url.as_deref().map_or_else(|| "in-process".normal(), |url| redact_url(url).cyan())
    );
    if let Some(accounts) = &network.accounts {
        println!("  {} {}", "Accounts:   ".dimmed(), accounts.source().cyan());
        if accounts.is_default_mnemonic() {
            println!(
                "  {} Using the public default mnemonic. Set PK or MNEMONIC for real deployments.",
                "WARNING:".yellow().bold()
            );
        }
    }
    if let Some(deployer) = network.deployer {
        println!("  {} {}", "Deployer:   ".dimmed(), deployer.to_string().cyan());
    }
    if let Some(gas_price) = network.gas_price {
        println!("  {} {}", "Gas price:  ".dimmed(), gas_price.to_string().cyan());
    }
    println!(
        "  {} {}",
        "Live:       ".dimmed(),
        if network.live { "true".green() } else { "false".normal() }
    );
    println!(
        "  {} {}",
        "Save deploys:".dimmed(),
        if network.save_deployments { "true".green() } else { "false".normal() }
    );
    if let Some(local) = &network.local {
        println!(
            "  {} block gas limit {}, gas {}, unlimited code size {}",
            "Local chain:".dimmed(),
            local.block_gas_limit.to_string().cyan(),
            local.gas.to_string().cyan(),
            local.allow_unlimited_contract_size.to_string().cyan()
        );
    }
    println!("  {} {}", "Strategy:   ".dimmed(), network.strategy.cyan());

    match &network.plan {
        DeploymentPlan::Deterministic(descriptor) => {
            println!("  {} {}", "Deployment: ".dimmed(), "deterministic".green().bold());
            println!("    {} {}", "Factory: ".dimmed(), descriptor.factory_address.to_string().cyan());
            println!("    {} {}", "Fund:    ".dimmed(), descriptor.deployer_address.to_string().cyan());
            println!("    {} {}", "Amount:  ".dimmed(), format_funding(descriptor.funding_amount).cyan());
        }
        DeploymentPlan::Standard => {
            println!("  {} {}", "Deployment: ".dimmed(), "standard".normal());
        }
    }
}

/// Print selectable network names.
pub fn print_network_names(names: &[&str]) {
    println!();
    println!("{}", format!("Networks ({}):", names.len()).blue().bold());
    for name in names {
        println!("  {}", name.cyan());
    }
}

// ── Project ────────────────────────────────────────────────────────

/// Print the project configuration.
pub fn print_project(config: &ProjectConfig) {
    println!();
    println!("{}", "Project configuration:".blue().bold());
    println!("  {} {}", "Sources:    ".dimmed(), config.paths.sources.display().to_string().cyan());
    println!("  {} {}", "Artifacts:  ".dimmed(), config.paths.artifacts.display().to_string().cyan());
    println!("  {} {}", "Cache:      ".dimmed(), config.paths.cache.display().to_string().cyan());
    println!("  {} {}", "Deploy:     ".dimmed(), config.paths.deploy.display().to_string().cyan());
    for (i, compiler) in config.solidity.compilers.iter().enumerate() {
        let label = if i == 0 { "Compiler:   " } else { "            " };
        println!(
            "  {} solc {}{}",
            label.dimmed(),
            compiler.version.cyan(),
            if compiler.settings.is_some() { " (custom settings)".dimmed() } else { "".normal() }
        );
    }
    println!(
        "  {} {}",
        "Verify:     ".dimmed(),
        if config.verification_enabled { "enabled".green() } else { "no ETHERSCAN_API_KEY".yellow() }
    );
    println!(
        "  {} {}",
        "Factory:    ".dimmed(),
        if config.deterministic_deployment { "registry bootstrap".green() } else { "default".normal() }
    );
}
