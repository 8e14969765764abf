use alloy_consensus::{TxEnvelope, TxLegacy};
use alloy_eips::eip2718::{Decodable2718, Typed2718};
use alloy_primitives::{Address, B256};

use super::errors::ResolveError;
use crate::{constants::BOOTSTRAP_NONCE, registry::BootstrapRecord};

/// Bootstrap transaction after decoding and signature recovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBootstrap {
    /// Decoded legacy transaction
    pub transaction: TxLegacy,
    /// Sender recovered from the signature
    pub sender: Address,
    /// Transaction hash
    pub tx_hash: B256,
}

/// Decode a record's raw transaction and check it against the record.
///
/// The transaction must be a legacy contract creation with nonce 0, signed
/// for the record's chain (or without EIP-155 replay protection), carrying
/// the record's gas price and gas limit, and recovering to the record's
/// signer. The signer's first CREATE address must be the declared factory.
pub fn validate_record(record: &BootstrapRecord) -> Result<DecodedBootstrap, ResolveError> {
    let chain_id = record.chain_id;

    let mut buf = record.raw_transaction.as_ref();
    let envelope = TxEnvelope::decode_2718(&mut buf)
        .map_err(|source| ResolveError::Decode { chain_id, source })?;
    if !buf.is_empty() {
        return Err(ResolveError::TrailingBytes { chain_id, remaining: buf.len() });
    }

    let signed = match envelope {
        TxEnvelope::Legacy(signed) => signed,
        other => {
            return Err(ResolveError::UnsupportedTransactionType { chain_id, tx_type: other.ty() })
        }
    };

    let tx = signed.tx();
    if !tx.to.is_create() {
        return Err(ResolveError::NotContractCreation { chain_id });
    }
    if tx.nonce != BOOTSTRAP_NONCE {
        return Err(ResolveError::NonZeroNonce { chain_id, nonce: tx.nonce });
    }
    if let Some(signed_for) = tx.chain_id {
        if signed_for != chain_id {
            return Err(ResolveError::ChainIdMismatch { chain_id, signed_for });
        }
    }
    if tx.gas_price != record.gas_price {
        return Err(ResolveError::GasPriceMismatch {
            chain_id,
            expected: record.gas_price,
            got: tx.gas_price,
        });
    }
    if tx.gas_limit != record.gas_limit {
        return Err(ResolveError::GasLimitMismatch {
            chain_id,
            expected: record.gas_limit,
            got: tx.gas_limit,
        });
    }

    let sender = signed
        .signature()
        .recover_address_from_prehash(&signed.signature_hash())
        .map_err(|_| ResolveError::InvalidSignature { chain_id })?;
    if sender != record.signer_address {
        return Err(ResolveError::SignerMismatch {
            chain_id,
            expected: record.signer_address,
            got: sender,
        });
    }

    let deployed_to = sender.create(BOOTSTRAP_NONCE);
    if deployed_to != record.factory_address {
        return Err(ResolveError::FactoryAddressMismatch {
            chain_id,
            expected: record.factory_address,
            got: deployed_to,
        });
    }

    Ok(DecodedBootstrap { transaction: tx.clone(), sender, tx_hash: *signed.hash() })
}
