//! Deployment Info Resolver
//!
//! Turns a chain id into everything needed to put the singleton factory on
//! that chain: which account to fund, how much to send it, which signed
//! transaction to broadcast afterwards, and where the factory will end up.
//!
//! Resolution is a pure function over the static registry. No I/O, no
//! retries and no shared mutable state, so it can be called from any thread.

mod decode;
pub mod errors;

pub use decode::{validate_record, DecodedBootstrap};
pub use errors::ResolveError;

use alloy_primitives::{Address, Bytes, U256};
use serde::{Serialize, Serializer};
use tracing::{debug, error};

use crate::registry::{self, BootstrapRecord};

/// Parameters for bootstrapping the singleton factory on one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentDescriptor {
    /// Address the factory is deployed at
    #[serde(rename = "factory")]
    pub factory_address: Address,
    /// Account to fund before broadcasting
    #[serde(rename = "deployer")]
    pub deployer_address: Address,
    /// Exact balance the deployer needs, in wei
    #[serde(rename = "funding", serialize_with = "serialize_decimal")]
    pub funding_amount: U256,
    /// Signed transaction to broadcast unchanged
    #[serde(rename = "signedTx")]
    pub signed_transaction: Bytes,
}

/// Wei required to execute a transaction at `gas_limit` and `gas_price`.
///
/// A `u64 * u128` product needs at most 192 bits, so the multiplication in
/// `U256` is always exact.
pub fn funding_amount(gas_limit: u64, gas_price: u128) -> U256 {
    U256::from(gas_limit) * U256::from(gas_price)
}

/// Resolve the factory bootstrap for `chain_id`.
///
/// Returns `Ok(None)` when the chain has no registry entry; callers should
/// then deploy through the chain's ordinary creation path. Returns an error
/// only when the registry entry exists but cannot be executed as declared.
pub fn resolve(chain_id: u64) -> Result<Option<DeploymentDescriptor>, ResolveError> {
    let Some(record) = registry::lookup(chain_id) else {
        debug!(target: "singleton_deploy::resolver", chain_id, "no bootstrap record");
        return Ok(None);
    };
    resolve_record(record).map(Some)
}

/// Validate a record and build its deployment descriptor
pub fn resolve_record(record: &BootstrapRecord) -> Result<DeploymentDescriptor, ResolveError> {
    let decoded = validate_record(record).inspect_err(|err| {
        error!(target: "singleton_deploy::resolver", chain_id = record.chain_id, %err, "malformed bootstrap record");
    })?;

    let descriptor = DeploymentDescriptor {
        factory_address: record.factory_address,
        deployer_address: record.signer_address,
        funding_amount: funding_amount(record.gas_limit, record.gas_price),
        signed_transaction: record.raw_transaction.clone(),
    };

    debug!(
        target: "singleton_deploy::resolver",
        chain_id = record.chain_id,
        tx_hash = %decoded.tx_hash,
        factory = %descriptor.factory_address,
        funding = %descriptor.funding_amount,
        "resolved bootstrap"
    );

    Ok(descriptor)
}

fn serialize_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FACTORY_DEPLOYER_ADDRESS, SINGLETON_FACTORY_ADDRESS};
    use alloy_consensus::{SignableTransaction, TxEnvelope, TxLegacy};
    use alloy_eips::eip2718::Encodable2718;
    use alloy_primitives::{address, TxKind, U512};
    use alloy_signer::SignerSync;
    use alloy_signer_local::PrivateKeySigner;
    use proptest::prelude::*;

    /// First account of the `test test ... junk` mnemonic
    const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn test_signer() -> PrivateKeySigner {
        TEST_KEY.parse().unwrap()
    }

    fn factory_init_code() -> Bytes {
        validate_record(registry::lookup(10000).unwrap()).unwrap().transaction.input
    }

    fn sign_legacy(signer: &PrivateKeySigner, tx: TxLegacy) -> Bytes {
        let signature = signer.sign_hash_sync(&tx.signature_hash()).unwrap();
        let envelope: TxEnvelope = tx.into_signed(signature).into();
        envelope.encoded_2718().into()
    }

    fn bootstrap_tx(chain_id: u64, gas_price: u128, gas_limit: u64) -> TxLegacy {
        TxLegacy {
            chain_id: Some(chain_id),
            nonce: 0,
            gas_price,
            gas_limit,
            to: TxKind::Create,
            value: U256::ZERO,
            input: factory_init_code(),
        }
    }

    /// Record signed by `signer` that is internally consistent
    fn self_consistent_record(signer: &PrivateKeySigner, chain_id: u64) -> BootstrapRecord {
        let tx = bootstrap_tx(chain_id, 7_000_000_000, 100_000);
        BootstrapRecord {
            chain_id,
            gas_price: tx.gas_price,
            gas_limit: tx.gas_limit,
            signer_address: signer.address(),
            raw_transaction: sign_legacy(signer, tx),
            factory_address: signer.address().create(0),
        }
    }

    #[test]
    fn test_scenario_smartbch_funding() {
        let descriptor = resolve(10000).unwrap().unwrap();
        assert_eq!(descriptor.funding_amount, U256::from(204_673_955_600_000u64));
        assert_eq!(descriptor.factory_address, SINGLETON_FACTORY_ADDRESS);
        assert_eq!(descriptor.deployer_address, FACTORY_DEPLOYER_ADDRESS);
        assert_eq!(descriptor.signed_transaction, registry::lookup(10000).unwrap().raw_transaction);
    }

    #[test]
    fn test_scenario_amber_funding() {
        let descriptor = resolve(10001).unwrap().unwrap();
        assert_eq!(descriptor.funding_amount, U256::from(100_000_000_000_000u64));
        assert_eq!(descriptor.factory_address, SINGLETON_FACTORY_ADDRESS);
        assert_eq!(descriptor.deployer_address, FACTORY_DEPLOYER_ADDRESS);
    }

    #[test]
    fn test_scenario_unsupported_chain() {
        assert!(resolve(1).unwrap().is_none());
    }

    #[test]
    fn test_funding_matches_wide_oracle() {
        for record in registry::records() {
            let descriptor = resolve(record.chain_id).unwrap().unwrap();
            let oracle = U512::from(record.gas_limit) * U512::from(record.gas_price);
            assert_eq!(U512::from(descriptor.funding_amount), oracle);
        }
    }

    #[test]
    fn test_funding_amount_extremes() {
        assert_eq!(funding_amount(0, u128::MAX), U256::ZERO);
        assert_eq!(funding_amount(u64::MAX, 0), U256::ZERO);

        let oracle = U512::from(u64::MAX) * U512::from(u128::MAX);
        assert_eq!(U512::from(funding_amount(u64::MAX, u128::MAX)), oracle);
        assert!(funding_amount(u64::MAX, u128::MAX) > U256::from(u128::MAX));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let first = resolve(10000).unwrap();
        for _ in 0..16 {
            assert_eq!(resolve(10000).unwrap(), first);
        }
    }

    #[test]
    fn test_resolve_concurrently() {
        let snapshot = registry::records().to_vec();
        let expected: Vec<_> =
            [1u64, 10000, 10001, 56].iter().map(|id| resolve(*id).unwrap()).collect();

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let expected = &expected;
                scope.spawn(move || {
                    for round in 0..64 {
                        let ids = [1u64, 10000, 10001, 56];
                        let index = (worker + round) % ids.len();
                        assert_eq!(resolve(ids[index]).unwrap(), expected[index]);
                    }
                });
            }
        });

        assert_eq!(registry::records(), snapshot.as_slice());
    }

    #[test]
    fn test_all_registry_records_validate() {
        for record in registry::records() {
            let decoded = validate_record(record).unwrap();
            assert_eq!(decoded.sender, record.signer_address);
            assert_eq!(decoded.transaction.chain_id, Some(record.chain_id));
            assert_eq!(decoded.transaction.input, factory_init_code());
        }
    }

    #[test]
    fn test_declared_signer_mismatch_fails() {
        let imposter = address!("0000000000000000000000000000000000000099");
        let record = BootstrapRecord {
            signer_address: imposter,
            ..registry::lookup(10000).unwrap().clone()
        };

        match resolve_record(&record).unwrap_err() {
            ResolveError::SignerMismatch { chain_id, expected, got } => {
                assert_eq!(chain_id, 10000);
                assert_eq!(expected, imposter);
                assert_eq!(got, FACTORY_DEPLOYER_ADDRESS);
            }
            other => panic!("Expected SignerMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_transaction_signed_by_other_key_fails() {
        let signer = test_signer();
        let record = BootstrapRecord {
            signer_address: FACTORY_DEPLOYER_ADDRESS,
            factory_address: SINGLETON_FACTORY_ADDRESS,
            ..self_consistent_record(&signer, 10000)
        };

        match resolve_record(&record).unwrap_err() {
            ResolveError::SignerMismatch { expected, got, .. } => {
                assert_eq!(expected, FACTORY_DEPLOYER_ADDRESS);
                assert_eq!(got, signer.address());
            }
            other => panic!("Expected SignerMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_self_consistent_record_resolves() {
        let signer = test_signer();
        let record = self_consistent_record(&signer, 31337);

        let descriptor = resolve_record(&record).unwrap();
        assert_eq!(descriptor.deployer_address, signer.address());
        assert_eq!(descriptor.factory_address, signer.address().create(0));
        assert_eq!(descriptor.funding_amount, U256::from(700_000_000_000_000u64));
    }

    #[test]
    fn test_gas_price_mismatch_fails() {
        let record = BootstrapRecord {
            gas_price: 1_000_000_000,
            ..registry::lookup(10000).unwrap().clone()
        };
        match resolve_record(&record).unwrap_err() {
            ResolveError::GasPriceMismatch { expected, got, .. } => {
                assert_eq!(expected, 1_000_000_000);
                assert_eq!(got, 2_046_739_556);
            }
            other => panic!("Expected GasPriceMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_gas_limit_mismatch_fails() {
        let record = BootstrapRecord { gas_limit: 50_000, ..registry::lookup(10001).unwrap().clone() };
        match resolve_record(&record).unwrap_err() {
            ResolveError::GasLimitMismatch { expected, got, .. } => {
                assert_eq!(expected, 50_000);
                assert_eq!(got, 100_000);
            }
            other => panic!("Expected GasLimitMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_transaction_replayed_under_other_chain_fails() {
        let amber = registry::lookup(10001).unwrap();
        let record = BootstrapRecord { chain_id: 10000, ..amber.clone() };
        match resolve_record(&record).unwrap_err() {
            ResolveError::ChainIdMismatch { chain_id, signed_for } => {
                assert_eq!(chain_id, 10000);
                assert_eq!(signed_for, 10001);
            }
            other => panic!("Expected ChainIdMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_factory_address_mismatch_fails() {
        let wrong = address!("0000000000000000000000000000000000001967");
        let record =
            BootstrapRecord { factory_address: wrong, ..registry::lookup(10000).unwrap().clone() };
        match resolve_record(&record).unwrap_err() {
            ResolveError::FactoryAddressMismatch { expected, got, .. } => {
                assert_eq!(expected, wrong);
                assert_eq!(got, SINGLETON_FACTORY_ADDRESS);
            }
            other => panic!("Expected FactoryAddressMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_non_zero_nonce_fails() {
        let signer = test_signer();
        let tx = TxLegacy { nonce: 1, ..bootstrap_tx(10000, 1_000_000_000, 100_000) };
        let record = BootstrapRecord {
            chain_id: 10000,
            gas_price: 1_000_000_000,
            gas_limit: 100_000,
            signer_address: signer.address(),
            raw_transaction: sign_legacy(&signer, tx),
            factory_address: signer.address().create(0),
        };
        match resolve_record(&record).unwrap_err() {
            ResolveError::NonZeroNonce { nonce, .. } => assert_eq!(nonce, 1),
            other => panic!("Expected NonZeroNonce, got {:?}", other),
        }
    }

    #[test]
    fn test_call_transaction_fails() {
        let signer = test_signer();
        let tx = TxLegacy {
            to: TxKind::Call(SINGLETON_FACTORY_ADDRESS),
            ..bootstrap_tx(10000, 1_000_000_000, 100_000)
        };
        let record = BootstrapRecord {
            chain_id: 10000,
            gas_price: 1_000_000_000,
            gas_limit: 100_000,
            signer_address: signer.address(),
            raw_transaction: sign_legacy(&signer, tx),
            factory_address: signer.address().create(0),
        };
        assert!(matches!(
            resolve_record(&record).unwrap_err(),
            ResolveError::NotContractCreation { chain_id: 10000 }
        ));
    }

    #[test]
    fn test_trailing_bytes_fail() {
        let original = registry::lookup(10000).unwrap();
        let mut raw = original.raw_transaction.to_vec();
        raw.push(0x00);
        let record = BootstrapRecord { raw_transaction: raw.into(), ..original.clone() };
        match resolve_record(&record).unwrap_err() {
            ResolveError::TrailingBytes { remaining, .. } => assert_eq!(remaining, 1),
            other => panic!("Expected TrailingBytes, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_transaction_fails() {
        let original = registry::lookup(10000).unwrap();
        let record = BootstrapRecord {
            raw_transaction: Bytes::from_static(&[0xf8, 0xa6, 0x80]),
            ..original.clone()
        };
        let err = resolve_record(&record).unwrap_err();
        assert!(matches!(err, ResolveError::Decode { chain_id: 10000, .. }), "got {err:?}");
        assert_eq!(err.chain_id(), 10000);
    }

    #[test]
    fn test_descriptor_json_shape() {
        let descriptor = resolve(10000).unwrap().unwrap();
        let json = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(json["funding"], "204673955600000");
        assert_eq!(
            json["factory"].as_str().unwrap().to_lowercase(),
            "0x914d7fec6aac8cd542e72bca78b30650d45643d7"
        );
        assert_eq!(
            json["deployer"].as_str().unwrap().to_lowercase(),
            "0xe1cb04a0fa36ddd16a06ea828007e35e1a3cbc37"
        );
        assert!(json["signedTx"].as_str().unwrap().starts_with("0xf8a6"));
    }

    proptest! {
        #[test]
        fn prop_unregistered_chains_resolve_to_none(chain_id in any::<u64>()) {
            prop_assume!(!registry::is_supported(chain_id));
            prop_assert!(resolve(chain_id).unwrap().is_none());
        }

        #[test]
        fn prop_funding_is_exact(gas_limit in any::<u64>(), gas_price in any::<u128>()) {
            let oracle = U512::from(gas_limit) * U512::from(gas_price);
            prop_assert_eq!(U512::from(funding_amount(gas_limit, gas_price)), oracle);
        }
    }
}
