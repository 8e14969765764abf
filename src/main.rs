use singleton_deploy::cli::{Cli, Command};
use singleton_deploy::config::ProjectConfig;
use singleton_deploy::network::{NetworkOverrides, NetworkSelector};
use singleton_deploy::{output, registry, resolver};

use clap::Parser;
use eyre::WrapErr;
use serde::Serialize;

/// Main entry point for the singleton factory deployment tool
fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    cli.log.init()?;

    match cli.command {
        Command::Resolve { chain_id, json } => {
            let descriptor = resolver::resolve(chain_id)
                .wrap_err_with(|| format!("failed to resolve bootstrap for chain {chain_id}"))?;
            if json {
                print_json(&descriptor)?;
            } else {
                match &descriptor {
                    Some(descriptor) => output::print_descriptor(chain_id, descriptor),
                    None => output::print_unsupported(chain_id),
                }
            }
        }
        Command::Registry { json } => {
            if json {
                print_json(registry::records())?;
            } else {
                output::print_registry(registry::records());
            }
        }
        Command::Check => {
            for record in registry::records() {
                match resolver::validate_record(record) {
                    Ok(decoded) => output::print_record_ok(record, &decoded),
                    Err(err) => {
                        output::print_record_failed(record.chain_id, &err.to_string());
                        return Err(err).wrap_err("bootstrap registry contains a malformed record");
                    }
                }
            }
        }
        Command::Network { network, overrides, chain_id, json } => {
            let overrides = NetworkOverrides::from_pairs(overrides.iter().map(String::as_str))?
                .merge(&NetworkOverrides { chain_id, ..Default::default() });

            let selector = NetworkSelector::from_env(&cli.env);
            let selected = selector
                .select(&network, &overrides)
                .wrap_err_with(|| format!("failed to select network {network}"))?;
            if json {
                print_json(&selected)?;
            } else {
                output::print_network(&selected);
            }
        }
        Command::Networks => {
            let selector = NetworkSelector::from_env(&cli.env);
            output::print_network_names(&selector.network_names());
        }
        Command::Config { json } => {
            let config = ProjectConfig::from_env(&cli.env)?;
            if json {
                print_json(&config)?;
            } else {
                output::print_project(&config);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
