use alloy_primitives::bytes;

use super::BootstrapRecord;
use crate::constants::{FACTORY_DEPLOYER_ADDRESS, SINGLETON_FACTORY_ADDRESS};

/// Bootstrap transactions, sorted by chain id.
///
/// Records are append-only. Once a record's transaction has been broadcast
/// on its chain, editing it would desynchronize the registry from the chain.
///
/// Every entry carries the same 83-byte init code for the CREATE2 singleton
/// factory. Only gas price and the EIP-155 signature differ between chains.
pub(super) static BOOTSTRAP_RECORDS: [BootstrapRecord; 2] = [
    // smartBCH mainnet
    BootstrapRecord {
        chain_id: 10000,
        gas_price: 2_046_739_556,
        gas_limit: 100_000,
        signer_address: FACTORY_DEPLOYER_ADDRESS,
        raw_transaction: bytes!(
            "f8a6"                                     // rlp list header
            "80"                                       // nonce 0
            "8479fec464"                               // gas price 2046739556
            "830186a0"                                 // gas limit 100000
            "80"                                       // to: contract creation
            "80"                                       // value 0
            "b853604580600e600039806000f350fe7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe03601600081602082378035828234f58015156039578182fd5b8082525050506014600cf3"
            "824e43"                                   // v = 10000 * 2 + 35
            "a0acd83aeb82fb5be9b50ddb756388b393a4dead90a53d4ad41be337bd7d323331"
            "a018c27606339dc54d38df057b870a61a6227d34ece4cc9c52d28738cdffb5caa7"
        ),
        factory_address: SINGLETON_FACTORY_ADDRESS,
    },
    // smartBCH Amber testnet
    BootstrapRecord {
        chain_id: 10001,
        gas_price: 1_000_000_000,
        gas_limit: 100_000,
        signer_address: FACTORY_DEPLOYER_ADDRESS,
        raw_transaction: bytes!(
            "f8a6"
            "80"
            "843b9aca00"                               // gas price 1 gwei
            "830186a0"
            "80"
            "80"
            "b853604580600e600039806000f350fe7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe03601600081602082378035828234f58015156039578182fd5b8082525050506014600cf3"
            "824e46"                                   // v = 10001 * 2 + 36
            "a09f7317d9b9d8d37fc4580600acfd4e73686385b107d78e9f9629c59fe96257e8"
            "a059e58570c604625c2ee1900ad9aaa30ba844e28da52ea1c2dabd38dcdc6ac636"
        ),
        factory_address: SINGLETON_FACTORY_ADDRESS,
    },
];
