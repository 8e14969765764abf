//! Account credentials shared by every remote network.
//!
//! A private key from `PK` takes precedence. Otherwise accounts are derived
//! from `MNEMONIC`, falling back to the well-known development mnemonic.

use alloy_primitives::Address;
use alloy_signer_local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use std::fmt;

use crate::{config::ConfigError, constants::DEFAULT_MNEMONIC};

/// Index of the named `deployer` account
pub const DEPLOYER_ACCOUNT_INDEX: u32 = 0;

/// Where deployment accounts come from
#[derive(Clone, PartialEq, Eq)]
pub enum Accounts {
    /// Explicit private keys, hex encoded
    PrivateKeys(Vec<String>),
    /// BIP-39 phrase, accounts derived along `m/44'/60'/0'/0/{index}`
    Mnemonic(String),
}

impl Accounts {
    /// Build the credential bundle from the `PK` and `MNEMONIC` settings
    pub fn from_env(private_key: Option<&str>, mnemonic: Option<&str>) -> Self {
        match (private_key, mnemonic) {
            (Some(pk), _) if !pk.is_empty() => Self::PrivateKeys(vec![pk.to_string()]),
            (_, Some(phrase)) if !phrase.is_empty() => Self::Mnemonic(phrase.to_string()),
            _ => Self::Mnemonic(DEFAULT_MNEMONIC.to_string()),
        }
    }

    /// Returns true when falling back to the public development mnemonic
    pub fn is_default_mnemonic(&self) -> bool {
        matches!(self, Self::Mnemonic(phrase) if phrase == DEFAULT_MNEMONIC)
    }

    /// Short description of the credential source, never the secret itself
    pub fn source(&self) -> &'static str {
        match self {
            Self::PrivateKeys(_) => "private key",
            Self::Mnemonic(_) if self.is_default_mnemonic() => "default mnemonic",
            Self::Mnemonic(_) => "mnemonic",
        }
    }

    /// Signer for the account at `index`
    pub fn signer(&self, index: u32) -> Result<PrivateKeySigner, ConfigError> {
        match self {
            Self::PrivateKeys(keys) => {
                let key = keys.get(index as usize).ok_or(ConfigError::AccountIndexOutOfRange {
                    index,
                    available: keys.len(),
                })?;
                key.parse::<PrivateKeySigner>().map_err(|_| ConfigError::InvalidPrivateKey)
            }
            Self::Mnemonic(phrase) => MnemonicBuilder::<English>::default()
                .phrase(phrase.as_str())
                .index(index)
                .map_err(|e| ConfigError::InvalidMnemonic(e.to_string()))?
                .build()
                .map_err(|e| ConfigError::InvalidMnemonic(e.to_string())),
        }
    }

    /// Address of the named `deployer` account
    pub fn deployer_address(&self) -> Result<Address, ConfigError> {
        Ok(self.signer(DEPLOYER_ACCOUNT_INDEX)?.address())
    }
}

impl Default for Accounts {
    fn default() -> Self {
        Self::Mnemonic(DEFAULT_MNEMONIC.to_string())
    }
}

impl fmt::Debug for Accounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrivateKeys(keys) => {
                f.debug_tuple("PrivateKeys").field(&format_args!("[{} redacted]", keys.len())).finish()
            }
            Self::Mnemonic(_) => f.debug_tuple("Mnemonic").field(&format_args!("{}", self.source())).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

    #[test]
    fn test_private_key_takes_precedence() {
        let accounts = Accounts::from_env(Some(TEST_KEY), Some(TEST_MNEMONIC));
        assert!(matches!(accounts, Accounts::PrivateKeys(ref keys) if keys.len() == 1));
        assert_eq!(accounts.source(), "private key");
        assert_eq!(
            accounts.deployer_address().unwrap(),
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn test_mnemonic_derivation() {
        let accounts = Accounts::from_env(None, Some(TEST_MNEMONIC));
        assert_eq!(accounts.source(), "mnemonic");
        assert_eq!(
            accounts.deployer_address().unwrap(),
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
        assert_eq!(
            accounts.signer(1).unwrap().address(),
            address!("70997970C51812dc3A010C7d01b50e0d17dc79C8")
        );
    }

    #[test]
    fn test_default_mnemonic_fallback() {
        let accounts = Accounts::from_env(None, None);
        assert!(accounts.is_default_mnemonic());
        assert_eq!(accounts.source(), "default mnemonic");
        assert_eq!(accounts, Accounts::default());
        assert!(accounts.deployer_address().is_ok());

        // Empty values behave like unset variables
        assert!(Accounts::from_env(Some(""), Some("")).is_default_mnemonic());
    }

    #[test]
    fn test_invalid_private_key() {
        let accounts = Accounts::from_env(Some("not_a_valid_hex_key"), None);
        match accounts.deployer_address().unwrap_err() {
            ConfigError::InvalidPrivateKey => {}
            other => panic!("Expected InvalidPrivateKey, got {:?}", other),
        }
    }

    #[test]
    fn test_private_key_index_out_of_range() {
        let accounts = Accounts::from_env(Some(TEST_KEY), None);
        match accounts.signer(1).unwrap_err() {
            ConfigError::AccountIndexOutOfRange { index, available } => {
                assert_eq!(index, 1);
                assert_eq!(available, 1);
            }
            other => panic!("Expected AccountIndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_mnemonic() {
        let accounts = Accounts::from_env(None, Some("definitely not a bip39 phrase"));
        assert!(matches!(accounts.deployer_address(), Err(ConfigError::InvalidMnemonic(_))));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug = format!("{:?}", Accounts::from_env(Some(TEST_KEY), None));
        assert!(!debug.contains("ac0974bec"));

        let debug = format!("{:?}", Accounts::from_env(None, Some(TEST_MNEMONIC)));
        assert!(!debug.contains("junk"));
    }
}
