//! Chain parameters.
//!
//! One [`ChainParams`] value exists per network. The test network is built
//! by copying the main network's value and overwriting a fixed set of
//! fields, and the regression test network is derived from the test network
//! the same way, so anything not explicitly overridden is shared.

/// Process-wide selection of the active network.
pub mod select;

use std::path::{Path, PathBuf};

use bitcoin::TxMerkleNode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use select::{ParamsSelector, init, params, select_params, select_params_from_flags};

use crate::acoin::{
    address::{Base58Prefixes, Base58Type},
    blockdata::{
        block::{Block, BlockHash},
        genesis::{GenesisError, GenesisInfo, genesis_builder},
    },
    network::Network,
    p2p::{
        Magic,
        seeds::{DnsSeed, SeedAddress, materialize_fixed_seeds},
    },
    pow::Target,
};

const MAIN_ALERT_KEY: &str = "0498288f9bc78ea9d9aeb73a7c5136538af11d24533826af034e6ee1728cc683e5e0927a0e395a84a5f1a53c53c45c2d1e3a12ac944e9b2303683cf7c085bbc1e5";
const TESTNET_ALERT_KEY: &str = "04008f443ff94075f465b35a58705da4b8884a910916b2906be8092a762e4a496555d0abe51b8cea8196a1b7521eeb017ad9aebf281954d5e75d93ae7c0a7faa6a";

const MAIN_DNS_SEEDS: [&str; 8] = [
    "seed1.a-coin.info",
    "seed2.a-coin.info",
    "seed3.a-coin.info",
    "seed4.a-coin.info",
    "seed5.a-coin.info",
    "seed6.a-coin.info",
    "seed7.a-coin.info",
    "seed8.a-coin.info",
];

/// Compiled-in bootstrap peers, as little-endian IPv4 images.
const MAIN_FIXED_SEEDS: [u32; 1] = [0x12345678];

/// Errors raised while building or selecting chain parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The genesis block could not be built or disagrees with its pinned
    /// values.
    #[error(transparent)]
    Genesis(#[from] GenesisError),

    /// A hardcoded hex constant is malformed.
    #[error("invalid hex constant: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Both the test network and the regression test network were requested.
    #[error("-testnet and -regtest cannot be used together")]
    ConflictingNetworks,
}

/// Immutable identity of one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainParams {
    network: Network,
    magic: Magic,
    alert_key: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    pow_limit: Target,
    subsidy_halving_interval: u32,
    genesis: Block,
    genesis_hash: BlockHash,
    expected_genesis_hash: Option<BlockHash>,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<SeedAddress>,
    base58_prefixes: Base58Prefixes,
    data_dir: String,
    require_rpc_auth: bool,
}

impl ChainParams {
    /// Builds the parameters for `network`.
    pub fn for_network(network: Network) -> Result<Self, ParamsError> {
        match network {
            Network::Main => Self::main(),
            Network::Testnet => Self::testnet(),
            Network::Regtest => Self::regtest(),
        }
    }

    /// Builds the main network parameters.
    ///
    /// Fails if the constructed genesis block does not match its pinned hash
    /// or merkle root.
    pub fn main() -> Result<Self, ParamsError> {
        let genesis_info = GenesisInfo::main();
        let genesis = genesis_builder()?.with_header_of(&genesis_info).build()?;
        let genesis_hash = genesis_info.verify(Network::Main, &genesis)?;

        let default_port = 17883;
        let params = Self {
            network: Network::Main,
            magic: Magic::MAIN,
            alert_key: hex::decode(MAIN_ALERT_KEY)?,
            default_port,
            rpc_port: 8832,
            pow_limit: Target::with_leading_zeros(20),
            subsidy_halving_interval: 388_800,
            genesis,
            genesis_hash,
            expected_genesis_hash: genesis_info.hash,
            dns_seeds: MAIN_DNS_SEEDS.iter().map(|host| DnsSeed::new(host)).collect(),
            fixed_seeds: materialize_fixed_seeds(&MAIN_FIXED_SEEDS, default_port),
            base58_prefixes: Base58Prefixes {
                pubkey_address: vec![23],
                script_address: vec![10],
                secret_key: vec![230],
                ext_public_key: vec![0x04, 0x88, 0xb2, 0x1e],
                ext_secret_key: vec![0x04, 0x88, 0xad, 0xe4],
            },
            data_dir: String::new(),
            require_rpc_auth: true,
        };

        debug!(network = %params.network, genesis = %params.genesis_hash, "built chain parameters");
        Ok(params)
    }

    /// Builds the test network parameters.
    pub fn testnet() -> Result<Self, ParamsError> {
        Self::testnet_from(&Self::main()?)
    }

    /// Builds the regression test network parameters.
    pub fn regtest() -> Result<Self, ParamsError> {
        Self::regtest_from(&Self::testnet()?)
    }

    /// Derives the test network from the main network.
    pub(crate) fn testnet_from(main: &ChainParams) -> Result<Self, ParamsError> {
        let mut params = main.clone();
        params.network = Network::Testnet;
        params.magic = Magic::TESTNET;
        params.alert_key = hex::decode(TESTNET_ALERT_KEY)?;
        params.default_port = 27883;
        params.rpc_port = 18832;
        params.data_dir = "testnet3".to_string();

        // Same coinbase, later start.
        let genesis_info = GenesisInfo::testnet();
        params.genesis.header.time = genesis_info.timestamp;
        params.genesis.header.nonce = genesis_info.nonce;
        params.genesis_hash = genesis_info.verify(Network::Testnet, &params.genesis)?;
        params.expected_genesis_hash = genesis_info.hash;

        params.fixed_seeds.clear();
        params.dns_seeds.clear();

        params.base58_prefixes = Base58Prefixes {
            pubkey_address: vec![87],
            script_address: vec![187],
            secret_key: vec![238],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xcf],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
        };

        debug!(network = %params.network, genesis = %params.genesis_hash, "built chain parameters");
        Ok(params)
    }

    /// Derives the regression test network from the test network.
    pub(crate) fn regtest_from(testnet: &ChainParams) -> Result<Self, ParamsError> {
        let mut params = testnet.clone();
        params.network = Network::Regtest;
        params.magic = Magic::REGTEST;
        params.subsidy_halving_interval = 150;
        params.pow_limit = Target::with_leading_zeros(1);

        let genesis_info = GenesisInfo::regtest();
        params.genesis.header.time = genesis_info.timestamp;
        params.genesis.header.bits = bitcoin::CompactTarget::from_consensus(genesis_info.bits);
        params.genesis.header.nonce = genesis_info.nonce;
        params.genesis_hash = genesis_info.verify(Network::Regtest, &params.genesis)?;
        params.expected_genesis_hash = genesis_info.hash;

        params.default_port = 18444;
        params.data_dir = "regtest".to_string();
        params.require_rpc_auth = false;
        params.dns_seeds.clear();

        debug!(network = %params.network, genesis = %params.genesis_hash, "built chain parameters");
        Ok(params)
    }

    /// The network these parameters describe.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Magic bytes prefixing every peer-to-peer message.
    pub fn message_start(&self) -> Magic {
        self.magic
    }

    /// Public key that signs alert messages.
    pub fn alert_key(&self) -> &[u8] {
        &self.alert_key
    }

    /// Default peer-to-peer listening port.
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Default RPC listening port.
    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// Easiest target a block header may satisfy.
    pub fn pow_limit(&self) -> Target {
        self.pow_limit
    }

    /// Number of blocks between block reward halvings.
    pub fn subsidy_halving_interval(&self) -> u32 {
        self.subsidy_halving_interval
    }

    /// The first block of the chain.
    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    /// Hash of [`ChainParams::genesis_block`].
    pub fn genesis_hash(&self) -> BlockHash {
        self.genesis_hash
    }

    /// Merkle root committed to by the genesis header.
    pub fn genesis_merkle_root(&self) -> TxMerkleNode {
        self.genesis.header.merkle_root
    }

    /// Genesis hash this set was checked against when it was built, if the
    /// network pins one.
    pub fn expected_genesis_hash(&self) -> Option<BlockHash> {
        self.expected_genesis_hash
    }

    /// DNS seeds queried for peers, in order.
    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    /// Compiled-in peer addresses.
    pub fn fixed_seeds(&self) -> &[SeedAddress] {
        &self.fixed_seeds
    }

    /// Version prefix bytes for `kind`.
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    /// All version prefixes of this network.
    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    /// Subdirectory, relative to the data directory, holding this network's
    /// state. Empty for the main network.
    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    /// Resolves this network's state directory under `base`.
    pub fn network_data_dir(&self, base: &Path) -> PathBuf {
        if self.data_dir.is_empty() {
            base.to_path_buf()
        } else {
            base.join(&self.data_dir)
        }
    }

    /// Whether the RPC server must be configured with credentials.
    pub fn require_rpc_auth(&self) -> bool {
        self.require_rpc_auth
    }

    /// Serializable digest of these parameters.
    pub fn summary(&self) -> ChainSummary {
        ChainSummary {
            network: self.network,
            magic: self.magic.to_string(),
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            genesis_hash: self.genesis_hash,
            genesis_merkle_root: self.genesis_merkle_root(),
            genesis_time: self.genesis.header.time,
            pow_limit: self.pow_limit.to_hex(),
            pow_limit_bits: self.pow_limit.to_compact().map(|bits| bits.to_consensus()),
            subsidy_halving_interval: self.subsidy_halving_interval,
            data_dir: self.data_dir.clone(),
            dns_seeds: self.dns_seeds.iter().map(|seed| seed.host.clone()).collect(),
            fixed_seeds: self.fixed_seeds.len(),
            require_rpc_auth: self.require_rpc_auth,
        }
    }
}

/// Serializable digest of a [`ChainParams`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSummary {
    /// Network name.
    pub network: Network,
    /// Magic bytes, hex encoded.
    pub magic: String,
    /// Default peer-to-peer port.
    pub default_port: u16,
    /// Default RPC port.
    pub rpc_port: u16,
    /// Genesis block hash.
    pub genesis_hash: BlockHash,
    /// Genesis merkle root.
    pub genesis_merkle_root: TxMerkleNode,
    /// Genesis header time.
    pub genesis_time: u32,
    /// Proof-of-work limit, hex encoded.
    pub pow_limit: String,
    /// Proof-of-work limit in compact form.
    pub pow_limit_bits: Option<u32>,
    /// Blocks between reward halvings.
    pub subsidy_halving_interval: u32,
    /// Data subdirectory.
    pub data_dir: String,
    /// DNS seed hosts.
    pub dns_seeds: Vec<String>,
    /// Number of compiled-in seed addresses.
    pub fixed_seeds: usize,
    /// Whether RPC credentials are required.
    pub require_rpc_auth: bool,
}
