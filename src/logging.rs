//! Tracing setup for the `singleton-deploy` binary.
//!
//! `RUST_LOG` wins when set. Otherwise `-v` flags raise the level from the
//! default `warn`. Logs go to stderr so JSON output on stdout stays clean.

use clap::Args;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration arguments
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Increase logging verbosity (-v = info, -vv = debug, -vvv = trace)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as newline-delimited JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

impl LogArgs {
    /// Level selected by the `-v` flags
    pub fn level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn filter(&self) -> EnvFilter {
        if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("singleton_deploy={}", self.level()))
        }
    }

    /// Install the global subscriber
    pub fn init(&self) -> eyre::Result<()> {
        let builder = fmt()
            .with_env_filter(self.filter())
            .with_target(self.verbose >= 2)
            .with_writer(std::io::stderr);

        let result = if self.log_json { builder.json().try_init() } else { builder.try_init() };
        result.map_err(|e| eyre::eyre!("failed to install tracing subscriber: {e}"))
    }
}
