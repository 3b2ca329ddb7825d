//! Transaction merkle root.
//!
//! Leaves are paired left to right and each pair is double-SHA256 hashed into
//! the next level. A level with an odd number of hashes pairs its last hash
//! with itself. A single leaf is its own root.

use bitcoin::{Transaction, TxMerkleNode};

use crate::acoin::hashes::{Hash, Sha256dHash, hash_pair};

/// Computes the merkle root of an ordered list of hashes.
///
/// Returns `None` for an empty list, which has no root.
pub fn merkle_root<I>(hashes: I) -> Option<Sha256dHash>
where
    I: IntoIterator<Item = Sha256dHash>,
{
    let mut level: Vec<Sha256dHash> = hashes.into_iter().collect();

    while level.len() > 1 {
        if level.len() & 1 == 1 {
            if let Some(&last) = level.last() {
                level.push(last);
            }
        }
        level = level
            .iter()
            .step_by(2)
            .zip(level.iter().skip(1).step_by(2))
            .map(|(left, right)| hash_pair(left, right))
            .collect();
    }

    level.pop()
}

/// Computes the merkle root over the txids of `transactions`.
pub fn transaction_merkle_root(transactions: &[Transaction]) -> Option<TxMerkleNode> {
    merkle_root(
        transactions
            .iter()
            .map(|tx| tx.compute_txid().to_raw_hash()),
    )
    .map(TxMerkleNode::from_raw_hash)
}
