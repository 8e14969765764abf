use alloy_eips::eip2718::Eip2718Error;
use alloy_primitives::Address;
use thiserror::Error;

/// A registry record that cannot be replayed as declared.
///
/// Any of these means the static data is wrong. Returning a descriptor
/// anyway would underfund the deployer or fund the wrong account.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Raw transaction is not a valid EIP-2718 envelope
    #[error("chain {chain_id}: bootstrap transaction cannot be decoded: {source}")]
    Decode {
        /// Chain of the offending record
        chain_id: u64,
        /// Underlying decode error
        #[source]
        source: Eip2718Error,
    },

    /// Bytes left over after the transaction
    #[error("chain {chain_id}: {remaining} trailing bytes after bootstrap transaction")]
    TrailingBytes {
        /// Chain of the offending record
        chain_id: u64,
        /// Number of unread bytes
        remaining: usize,
    },

    /// Only legacy transactions can be replayed on chains without typed tx support
    #[error("chain {chain_id}: bootstrap transaction has type {tx_type}, expected legacy")]
    UnsupportedTransactionType {
        /// Chain of the offending record
        chain_id: u64,
        /// EIP-2718 type byte
        tx_type: u8,
    },

    /// Transaction has a recipient and would not create the factory
    #[error("chain {chain_id}: bootstrap transaction is not a contract creation")]
    NotContractCreation {
        /// Chain of the offending record
        chain_id: u64,
    },

    /// Factory address only holds for the signer's first transaction
    #[error("chain {chain_id}: bootstrap transaction nonce is {nonce}, expected 0")]
    NonZeroNonce {
        /// Chain of the offending record
        chain_id: u64,
        /// Nonce found in the transaction
        nonce: u64,
    },

    /// EIP-155 chain id in the signature differs from the registry key
    #[error("chain {chain_id}: bootstrap transaction is signed for chain {signed_for}")]
    ChainIdMismatch {
        /// Chain of the offending record
        chain_id: u64,
        /// Chain id bound by the signature
        signed_for: u64,
    },

    /// Declared gas price differs from the transaction
    #[error("chain {chain_id}: gas price mismatch: record has {expected}, transaction has {got}")]
    GasPriceMismatch {
        /// Chain of the offending record
        chain_id: u64,
        /// Gas price declared in the record
        expected: u128,
        /// Gas price in the transaction
        got: u128,
    },

    /// Declared gas limit differs from the transaction
    #[error("chain {chain_id}: gas limit mismatch: record has {expected}, transaction has {got}")]
    GasLimitMismatch {
        /// Chain of the offending record
        chain_id: u64,
        /// Gas limit declared in the record
        expected: u64,
        /// Gas limit in the transaction
        got: u64,
    },

    /// Signature does not recover to any address
    #[error("chain {chain_id}: bootstrap transaction signature is invalid")]
    InvalidSignature {
        /// Chain of the offending record
        chain_id: u64,
    },

    /// Recovered sender differs from the declared signer
    #[error("chain {chain_id}: bootstrap signer mismatch: record declares {expected}, transaction recovers to {got}")]
    SignerMismatch {
        /// Chain of the offending record
        chain_id: u64,
        /// Signer declared in the record
        expected: Address,
        /// Sender recovered from the signature
        got: Address,
    },

    /// Declared factory address is not the signer's first CREATE address
    #[error("chain {chain_id}: factory address mismatch: record declares {expected}, signer deploys to {got}")]
    FactoryAddressMismatch {
        /// Chain of the offending record
        chain_id: u64,
        /// Factory address declared in the record
        expected: Address,
        /// `signer.create(0)`
        got: Address,
    },
}

impl ResolveError {
    /// Chain id of the record that failed validation
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Decode { chain_id, .. }
            | Self::TrailingBytes { chain_id, .. }
            | Self::UnsupportedTransactionType { chain_id, .. }
            | Self::NotContractCreation { chain_id }
            | Self::NonZeroNonce { chain_id, .. }
            | Self::ChainIdMismatch { chain_id, .. }
            | Self::GasPriceMismatch { chain_id, .. }
            | Self::GasLimitMismatch { chain_id, .. }
            | Self::InvalidSignature { chain_id }
            | Self::SignerMismatch { chain_id, .. }
            | Self::FactoryAddressMismatch { chain_id, .. } => *chain_id,
        }
    }
}
