use serde::Serialize;

/// Where a network's JSON-RPC endpoint lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcEndpoint {
    /// In-process development chain, no URL
    InProcess,
    /// Fixed public endpoint
    Url(&'static str),
    /// Infura endpoint, `https://{subdomain}.infura.io/v3/{INFURA_KEY}`
    Infura(&'static str),
}

/// Settings only meaningful for the in-process development chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalChainSettings {
    /// Skip the EIP-170 code size limit
    pub allow_unlimited_contract_size: bool,
    /// Block gas limit
    pub block_gas_limit: u64,
    /// Default gas for transactions
    pub gas: u64,
}

/// Built-in network definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkEntry {
    /// Name used to select the network
    pub name: &'static str,
    /// EIP-155 chain id
    pub chain_id: u64,
    /// JSON-RPC endpoint
    pub rpc: RpcEndpoint,
    /// Live network, as opposed to a throwaway dev chain
    pub live: bool,
    /// Persist deployment records
    pub save_deployments: bool,
    /// Fixed gas price in wei
    pub gas_price: Option<u128>,
    /// Dev chain settings, `None` for remote networks
    pub local: Option<LocalChainSettings>,
}

impl NetworkEntry {
    const fn remote(name: &'static str, chain_id: u64, rpc: RpcEndpoint) -> Self {
        Self { name, chain_id, rpc, live: true, save_deployments: true, gas_price: None, local: None }
    }
}

/// Networks the toolchain knows about out of the box
pub(super) static NETWORKS: [NetworkEntry; 16] = [
    NetworkEntry {
        name: "hardhat",
        chain_id: 31337,
        rpc: RpcEndpoint::InProcess,
        live: false,
        save_deployments: false,
        gas_price: None,
        local: Some(LocalChainSettings {
            allow_unlimited_contract_size: true,
            block_gas_limit: 100_000_000,
            gas: 100_000_000,
        }),
    },
    NetworkEntry::remote("mainnet", 1, RpcEndpoint::Infura("mainnet")),
    NetworkEntry::remote("xdai", 100, RpcEndpoint::Url("https://xdai.poanetwork.dev")),
    NetworkEntry::remote("ewc", 246, RpcEndpoint::Url("https://rpc.energyweb.org")),
    NetworkEntry::remote("rinkeby", 4, RpcEndpoint::Infura("rinkeby")),
    NetworkEntry::remote("goerli", 5, RpcEndpoint::Infura("goerli")),
    NetworkEntry::remote("kovan", 42, RpcEndpoint::Infura("kovan")),
    NetworkEntry::remote("polygon", 137, RpcEndpoint::Infura("polygon-mainnet")),
    NetworkEntry::remote("volta", 73799, RpcEndpoint::Url("https://volta-rpc.energyweb.org")),
    NetworkEntry::remote("bsc", 56, RpcEndpoint::Url("https://bsc-dataseed.binance.org/")),
    NetworkEntry::remote("arbitrum", 42161, RpcEndpoint::Url("https://arb1.arbitrum.io/rpc")),
    NetworkEntry::remote(
        "fantomTestnet",
        4002,
        RpcEndpoint::Url("https://rpc.testnet.fantom.network/"),
    ),
    NetworkEntry::remote(
        "smartbch",
        10000,
        RpcEndpoint::Url("https://smartbch.fountainhead.cash/mainnet"),
    ),
    NetworkEntry::remote("smartbch-amber", 10001, RpcEndpoint::Url("http://moeing.tech:8545")),
    NetworkEntry {
        gas_price: Some(50_000_000_000),
        ..NetworkEntry::remote("dogechain", 2000, RpcEndpoint::Url("https://rpc.dogechain.dog"))
    },
    NetworkEntry::remote(
        "dogechain-testnet",
        568,
        RpcEndpoint::Url("https://rpc-testnet.dogechain.dog"),
    ),
];
