//! Genesis block information for the A-Coin networks.
//!
//! Every network starts from a block built out of the same coinbase
//! transaction; only the header's time, bits and nonce differ. The builder
//! here produces that block deterministically, and [`GenesisInfo`] holds the
//! hardcoded values a built block is checked against.

use bitcoin::{
    Amount, CompactTarget, TxMerkleNode,
    block::{Header, Version},
    script::PushBytesError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::acoin::{
    blockdata::{
        block::{Block, BlockHash},
        merkle::transaction_merkle_root,
        transaction::coinbase,
    },
    hashes::Hash,
    network::Network,
    pow::Target,
};

/// Headline embedded in the genesis coinbase.
pub const GENESIS_TIMESTAMP: &str =
    "170814-DN Egypt-China and Israel present alternatives to Suez Canal";

/// Public key the genesis output pays to.
///
/// The published key has an odd number of hex digits; the dangling final
/// digit was never part of the output script, so it is omitted here.
pub const GENESIS_OUTPUT_KEY: &str = "043e5fd19808f21e14e195e5bd6cbf884d31d29816de6f4649d8c258a5cc01bbd5c853d56bb99e427c1bdc3690ef3cb268c855caebecfb813ec63bfe2b8afd";

/// Value of the genesis output: one coin.
pub const GENESIS_REWARD: Amount = Amount::ONE_BTC;

/// Errors raised while building or validating a genesis block.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// A coinbase script push exceeded the script size limits.
    #[error("genesis coinbase script push: {0}")]
    ScriptPush(#[from] PushBytesError),

    /// The block has no transactions to compute a merkle root from.
    #[error("genesis block has no transactions")]
    EmptyMerkleTree,

    /// The computed block hash differs from the hardcoded one.
    #[error("{network} genesis hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch {
        /// Network whose genesis block was checked.
        network: Network,
        /// Hardcoded hash.
        expected: BlockHash,
        /// Hash of the constructed block.
        computed: BlockHash,
    },

    /// The computed merkle root differs from the hardcoded one.
    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch {
        /// Network whose genesis block was checked.
        network: Network,
        /// Hardcoded merkle root.
        expected: TxMerkleNode,
        /// Merkle root of the constructed block.
        computed: TxMerkleNode,
    },
}

/// Fixed inputs of a genesis block.
///
/// The builder is plain data: clone it, change the header fields, and build
/// again to derive one network's genesis block from another's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisBuilder {
    /// Text embedded in the coinbase input script.
    pub timestamp: String,
    /// Value of the single coinbase output.
    pub reward: Amount,
    /// Public key the coinbase output pays to.
    pub output_key: Vec<u8>,
    /// Header version.
    pub version: Version,
    /// Header time.
    pub time: u32,
    /// Header difficulty bits.
    pub bits: CompactTarget,
    /// Header nonce.
    pub nonce: u32,
}

impl GenesisBuilder {
    /// Creates a builder for the given coinbase inputs, with a version 1
    /// header and zeroed time, bits and nonce.
    pub fn new(timestamp: &str, reward: Amount, output_key: Vec<u8>) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            reward,
            output_key,
            version: Version::ONE,
            time: 0,
            bits: CompactTarget::from_consensus(0),
            nonce: 0,
        }
    }

    /// Sets the header time.
    pub fn time(mut self, time: u32) -> Self {
        self.time = time;
        self
    }

    /// Sets the header difficulty bits.
    pub fn bits(mut self, bits: u32) -> Self {
        self.bits = CompactTarget::from_consensus(bits);
        self
    }

    /// Sets the header nonce.
    pub fn nonce(mut self, nonce: u32) -> Self {
        self.nonce = nonce;
        self
    }

    /// Sets the header version.
    pub fn version(mut self, version: i32) -> Self {
        self.version = Version::from_consensus(version);
        self
    }

    /// Copies the header fields from `info`.
    pub fn with_header_of(self, info: &GenesisInfo) -> Self {
        self.version(info.version)
            .time(info.timestamp)
            .bits(info.bits)
            .nonce(info.nonce)
    }

    /// Builds the genesis block.
    ///
    /// The block holds exactly one coinbase transaction, its previous block
    /// hash is all zeros and its merkle root is computed over the
    /// transaction list.
    pub fn build(&self) -> Result<Block, GenesisError> {
        let tx = coinbase(&self.timestamp, self.reward, &self.output_key)?;
        let transactions = vec![tx];
        let merkle_root =
            transaction_merkle_root(&transactions).ok_or(GenesisError::EmptyMerkleTree)?;

        let header = Header {
            version: self.version,
            prev_blockhash: BlockHash::all_zeros(),
            merkle_root,
            time: self.time,
            bits: self.bits,
            nonce: self.nonce,
        };

        Ok(Block::new(header, transactions))
    }

    /// Searches for a nonce whose block hash satisfies `limit`.
    ///
    /// The search starts at the builder's nonce and stops when the nonce
    /// space is exhausted, in which case `None` is returned.
    pub fn mine(&self, limit: Target) -> Result<Option<Block>, GenesisError> {
        let mut block = self.build()?;
        loop {
            if limit.is_met_by(&block.block_hash()) {
                return Ok(Some(block));
            }
            match block.header.nonce.checked_add(1) {
                Some(nonce) => block.header.nonce = nonce,
                None => return Ok(None),
            }
        }
    }
}

/// Genesis block information for different networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisInfo {
    /// The hash of the genesis block, if it is pinned.
    pub hash: Option<BlockHash>,
    /// The merkle root of the genesis block.
    pub merkle_root: TxMerkleNode,
    /// The timestamp of the genesis block.
    pub timestamp: u32,
    /// The nonce of the genesis block.
    pub nonce: u32,
    /// The bits (difficulty) of the genesis block.
    pub bits: u32,
    /// The version of the genesis block.
    pub version: i32,
}

/// Merkle root shared by every network's genesis block.
const GENESIS_MERKLE_ROOT: [u8; 32] = [
    0x63, 0x5a, 0x73, 0x21, 0x7f, 0x20, 0xa0, 0xa1, 0x85, 0x4e, 0x2a, 0xdb, 0xec, 0xab, 0xfa, 0x48,
    0x5f, 0x39, 0xfc, 0xb6, 0x1a, 0x5b, 0xfa, 0x0d, 0xde, 0x50, 0x7e, 0x14, 0xbb, 0x7b, 0xfe, 0x01,
];

impl GenesisInfo {
    /// Returns the genesis block information for the specified network.
    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Main => Self::main(),
            Network::Testnet => Self::testnet(),
            Network::Regtest => Self::regtest(),
        }
    }

    /// Returns the genesis block information for the main network.
    pub fn main() -> Self {
        Self {
            hash: Some(BlockHash::from_byte_array([
                0x9d, 0xa3, 0x3e, 0x41, 0x6f, 0xca, 0x26, 0xfa, 0xec, 0x59, 0x55, 0x90, 0xe0, 0x51,
                0xa2, 0xb6, 0x9b, 0xc1, 0x0f, 0x62, 0x92, 0xb0, 0x7f, 0x6b, 0xbc, 0xd1, 0x0a, 0xcd,
                0xd3, 0x05, 0x00, 0x00,
            ])),
            merkle_root: TxMerkleNode::from_byte_array(GENESIS_MERKLE_ROOT),
            timestamp: 1503802784,
            nonce: 2090606798,
            bits: 0x1e0fffff,
            version: 1,
        }
    }

    /// Returns the genesis block information for the test network.
    pub fn testnet() -> Self {
        Self {
            hash: Some(BlockHash::from_byte_array([
                0xd3, 0x09, 0x1c, 0x4a, 0xca, 0x06, 0x6e, 0x8a, 0x1a, 0x8b, 0xf5, 0x96, 0x0f, 0x92,
                0x69, 0x71, 0x87, 0x63, 0x92, 0xaa, 0xaf, 0x57, 0xc6, 0xeb, 0x0d, 0x6c, 0x74, 0x40,
                0xee, 0x0a, 0x00, 0x00,
            ])),
            timestamp: 1505010146,
            nonce: 415697184,
            ..Self::main()
        }
    }

    /// Returns the genesis block information for the regression test
    /// network.
    ///
    /// The hash is not pinned: local miners may regenerate the nonce.
    pub fn regtest() -> Self {
        Self {
            hash: None,
            timestamp: 1296688602,
            nonce: 3,
            bits: 0x207fffff,
            ..Self::testnet()
        }
    }

    /// Checks a constructed genesis block against this information.
    ///
    /// The merkle root is always compared; the block hash only when it is
    /// pinned. Returns the computed block hash.
    pub fn verify(&self, network: Network, block: &Block) -> Result<BlockHash, GenesisError> {
        let merkle_root = block
            .compute_merkle_root()
            .ok_or(GenesisError::EmptyMerkleTree)?;
        if merkle_root != self.merkle_root {
            return Err(GenesisError::MerkleRootMismatch {
                network,
                expected: self.merkle_root,
                computed: merkle_root,
            });
        }

        let computed = block.block_hash();
        match self.hash {
            Some(expected) if expected != computed => Err(GenesisError::HashMismatch {
                network,
                expected,
                computed,
            }),
            _ => Ok(computed),
        }
    }
}

/// Returns a builder for the shared genesis coinbase.
pub fn genesis_builder() -> Result<GenesisBuilder, hex::FromHexError> {
    let output_key = hex::decode(GENESIS_OUTPUT_KEY)?;
    Ok(GenesisBuilder::new(
        GENESIS_TIMESTAMP,
        GENESIS_REWARD,
        output_key,
    ))
}

#[cfg(test)]
mod tests {
    use bitcoin::consensus::encode::serialize;

    use super::*;

    const REGTEST_GENESIS_HASH: &str =
        "1aca9d278299037b526848063d889ec19a4fefc92aabef267f14591e403ad86e";

    fn build(network: Network) -> Block {
        let info = GenesisInfo::for_network(network);
        genesis_builder().unwrap().with_header_of(&info).build().unwrap()
    }

    #[test]
    fn test_genesis_info() {
        let main = GenesisInfo::main();
        assert_eq!(
            main.hash.unwrap().to_string(),
            "000005d3cd0ad1bc6b7fb092620fc19bb6a251e0905559ecfa26ca6f413ea39d"
        );
        assert_eq!(
            main.merkle_root.to_string(),
            "01fe7bbb147e50de0dfa5b1ab6fc395f48faabecdb2a4e85a1a0207f21735a63"
        );
        assert_eq!(main.timestamp, 1503802784);
        assert_eq!(main.nonce, 2090606798);
        assert_eq!(main.bits, 0x1e0fffff);
        assert_eq!(main.version, 1);

        assert_eq!(
            GenesisInfo::testnet().hash.unwrap().to_string(),
            "00000aee40746c0debc657afaa9263877169920f96f58b1a8a6e06ca4a1c09d3"
        );
        assert_eq!(GenesisInfo::regtest().hash, None);
    }

    #[test]
    fn test_output_key_length() {
        assert_eq!(genesis_builder().unwrap().output_key.len(), 63);
    }

    #[test]
    fn test_coinbase_serialization() {
        let block = build(Network::Main);
        let tx = &block.transactions()[0];
        assert_eq!(
            hex::encode(serialize(&tx.input[0].script_sig)),
            "4b04ffff001d0104433137303831342d444e2045677970742d4368696e6120616e642049737261656c2070726573656e7420616c7465726e61746976657320746f205375657a2043616e616c"
        );
        assert_eq!(tx.output[0].value, Amount::from_sat(100_000_000));
        assert_eq!(
            tx.compute_txid().to_string(),
            "01fe7bbb147e50de0dfa5b1ab6fc395f48faabecdb2a4e85a1a0207f21735a63"
        );
    }

    #[test]
    fn test_main_header_serialization() {
        let block = build(Network::Main);
        assert_eq!(
            hex::encode(serialize(block.header())),
            "010000000000000000000000000000000000000000000000000000000000000000000000635a7321\
             7f20a0a1854e2adbecabfa485f39fcb61a5bfa0dde507e14bb7bfe01a035a259ffff0f1ece209c7c"
        );
    }

    #[test]
    fn test_pinned_genesis_blocks_verify() {
        for network in [Network::Main, Network::Testnet] {
            let info = GenesisInfo::for_network(network);
            let block = build(network);
            assert_eq!(block.header().prev_blockhash, BlockHash::all_zeros());
            assert_eq!(block.transaction_count(), 1);
            assert_eq!(info.verify(network, &block).unwrap(), info.hash.unwrap());
        }
    }

    #[test]
    fn test_genesis_is_deterministic() {
        assert_eq!(build(Network::Main), build(Network::Main));
        assert_eq!(
            build(Network::Testnet).block_hash(),
            build(Network::Testnet).block_hash()
        );
    }

    #[test]
    fn test_regtest_hash_is_not_enforced() {
        let block = build(Network::Regtest);
        assert_eq!(block.block_hash().to_string(), REGTEST_GENESIS_HASH);

        let mut renonced = block.clone();
        renonced.header.nonce = 12345;
        assert!(
            GenesisInfo::regtest()
                .verify(Network::Regtest, &renonced)
                .is_ok()
        );
    }

    #[test]
    fn test_hash_mismatch_reported() {
        let mut block = build(Network::Main);
        block.header.nonce = block.header.nonce.wrapping_add(1);

        match GenesisInfo::main().verify(Network::Main, &block) {
            Err(GenesisError::HashMismatch {
                network,
                expected,
                computed,
            }) => {
                assert_eq!(network, Network::Main);
                assert_eq!(Some(expected), GenesisInfo::main().hash);
                assert_eq!(computed, block.block_hash());
            }
            other => panic!("expected hash mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_merkle_root_mismatch_reported() {
        let info = GenesisInfo::main();
        let block = genesis_builder()
            .unwrap()
            .with_header_of(&info)
            .build()
            .map(|mut block| {
                block.transactions[0].output[0].value = Amount::from_sat(1);
                block
            })
            .unwrap();

        assert!(matches!(
            info.verify(Network::Main, &block),
            Err(GenesisError::MerkleRootMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_block_rejected() {
        let mut block = build(Network::Main);
        block.transactions.clear();
        assert!(matches!(
            GenesisInfo::main().verify(Network::Main, &block),
            Err(GenesisError::EmptyMerkleTree)
        ));
    }

    #[test]
    fn test_genesis_meets_own_bits() {
        for network in Network::ALL {
            let block = build(network);
            let target = Target::from_compact(block.header().bits).unwrap();
            assert!(target.is_met_by(&block.block_hash()), "{network}");
        }
    }

    #[test]
    fn test_mine_regtest_nonce() {
        let limit = Target::with_leading_zeros(1);
        let builder = genesis_builder()
            .unwrap()
            .with_header_of(&GenesisInfo::regtest())
            .nonce(0);

        let mined = builder.mine(limit).unwrap().unwrap();
        assert!(limit.is_met_by(&mined.block_hash()));
        // Nonce 0 hashes above the regtest limit; nonce 1 is the first hit.
        assert_eq!(mined.header().nonce, 1);
        assert_eq!(
            mined.block_hash().to_string(),
            "54067044d23a9fa58d4674711c0af3fc90383b95c1dbfd612546bead3c056443"
        );
    }

    #[test]
    fn test_mine_reports_exhausted_nonce_space() {
        let builder = genesis_builder()
            .unwrap()
            .with_header_of(&GenesisInfo::regtest())
            .nonce(u32::MAX);
        assert!(builder.mine(Target::zero()).unwrap().is_none());
    }
}
