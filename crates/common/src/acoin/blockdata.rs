/// Block value: header plus transactions.
pub mod block;

/// Genesis block construction and validation for A-Coin networks.
pub mod genesis;

/// Transaction merkle root.
pub mod merkle;

/// Coinbase transaction construction.
pub mod transaction;
