//! Chain Bootstrap Registry
//!
//! Static table of pre-signed singleton factory bootstrap transactions,
//! keyed by chain id. The table is compiled into the binary and never
//! mutated, so lookups are pure and need no synchronization.

mod records;

use alloy_primitives::{Address, Bytes};
use serde::Serialize;

use records::BOOTSTRAP_RECORDS;

/// Pre-signed bootstrap transaction for one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapRecord {
    /// Chain the transaction was signed for
    pub chain_id: u64,
    /// Gas price encoded in the transaction, in wei
    pub gas_price: u128,
    /// Gas limit encoded in the transaction
    pub gas_limit: u64,
    /// Account that signed the transaction and must be funded before broadcast
    pub signer_address: Address,
    /// RLP encoded signed transaction, broadcast as-is
    pub raw_transaction: Bytes,
    /// Address the factory lands at once the transaction is mined
    pub factory_address: Address,
}

/// Returns the bootstrap record for `chain_id`, if the chain has one.
///
/// A missing record is the normal case for most chains and means the
/// chain has no deterministic bootstrap.
pub fn lookup(chain_id: u64) -> Option<&'static BootstrapRecord> {
    BOOTSTRAP_RECORDS
        .binary_search_by_key(&chain_id, |record| record.chain_id)
        .ok()
        .map(|index| &BOOTSTRAP_RECORDS[index])
}

/// All registered records, sorted by chain id
pub fn records() -> &'static [BootstrapRecord] {
    &BOOTSTRAP_RECORDS
}

/// Chain ids with a registered bootstrap transaction
pub fn supported_chain_ids() -> impl Iterator<Item = u64> {
    BOOTSTRAP_RECORDS.iter().map(|record| record.chain_id)
}

/// Returns true if `chain_id` has a registered bootstrap transaction
pub fn is_supported(chain_id: u64) -> bool {
    lookup(chain_id).is_some()
}
