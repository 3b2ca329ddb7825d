/// Base58 version prefixes for the address codec.
pub mod address;
/// Block data structures: transactions, merkle trees, blocks and genesis.
pub mod blockdata;
/// Per-network chain parameters and the active-network selection.
pub mod chainparams;
/// Hash functions and types used by the block primitives.
pub mod hashes;
/// Network types and constants.
pub mod network;
/// Peer-to-peer identity: magic bytes and seed addresses.
pub mod p2p;
/// Proof of Work targets.
pub mod pow;
