use alloy_primitives::{address, Address};

/// Account that signed every bootstrap transaction in the registry.
///
/// The factory is created by this account's first transaction (nonce 0),
/// which is what pins the factory to the same address on every chain.
pub const FACTORY_DEPLOYER_ADDRESS: Address =
    address!("E1CB04A0fA36DdD16a06ea828007E35e1a3cBC37");

/// Singleton factory address, `FACTORY_DEPLOYER_ADDRESS.create(0)`
pub const SINGLETON_FACTORY_ADDRESS: Address =
    address!("914d7Fec6aaC8cd542e72Bca78B30650d45643d7");

/// Nonce the bootstrap transaction must be sent with
pub const BOOTSTRAP_NONCE: u64 = 0;

/// Mnemonic used when neither `PK` nor `MNEMONIC` is configured
pub const DEFAULT_MNEMONIC: &str =
    "candy maple cake sugar pudding cream honey rich smooth crumble sweet treat";

/// Primary Solidity compiler when `SOLIDITY_VERSION` is unset
pub const DEFAULT_SOLIDITY_VERSION: &str = "0.7.6";

/// Additional compilers always made available next to the primary one
pub const LEGACY_SOLIDITY_VERSIONS: [&str; 2] = ["0.6.12", "0.5.17"];

/// Name of the network built from `NODE_URL`
pub const CUSTOM_NETWORK_NAME: &str = "custom";

/// Network selected when none is given
pub const DEFAULT_NETWORK_NAME: &str = "hardhat";
