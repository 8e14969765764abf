//! # singleton-deploy - deterministic singleton factory deployment
//!
//! Resolves the pre-signed transaction, deployer funding and factory address
//! needed to put a CREATE2 singleton factory at the same address on every
//! supported EVM chain, plus the network selection and project configuration
//! that feed it.

pub mod cli;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod deployment;
pub mod logging;
pub mod network;
pub mod output;
pub mod registry;
pub mod resolver;
