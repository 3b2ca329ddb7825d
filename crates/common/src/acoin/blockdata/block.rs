pub use bitcoin::block::{BlockHash, Header, Version};
use bitcoin::{Transaction, TxMerkleNode};

use crate::acoin::blockdata::merkle::transaction_merkle_root;

/// Represents a block in the blockchain.
///
/// A `Block` contains:
/// - The header of the block, which includes metadata like timestamp and
///   previous block hash
/// - A list of transactions contained within the block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// The block header
    pub header: Header,
    /// List of transactions contained in the block
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Creates a new block with the specified transactions
    pub fn new(header: Header, transactions: Vec<Transaction>) -> Self {
        Block {
            header,
            transactions,
        }
    }

    /// Gets a reference to the block header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Gets the number of transactions in the block
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Gets a reference to the transactions
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Double-SHA256 of the serialized 80-byte header.
    pub fn block_hash(&self) -> BlockHash {
        self.header.block_hash()
    }

    /// Computes the merkle root of the block's transactions.
    ///
    /// Returns `None` if the block has no transactions.
    pub fn compute_merkle_root(&self) -> Option<TxMerkleNode> {
        transaction_merkle_root(&self.transactions)
    }

    /// Checks that the header commits to the block's transactions.
    pub fn check_merkle_root(&self) -> bool {
        self.compute_merkle_root() == Some(self.header.merkle_root)
    }
}

impl From<Block> for bitcoin::Block {
    fn from(block: Block) -> Self {
        bitcoin::Block {
            header: block.header,
            txdata: block.transactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use bitcoin::{CompactTarget, hashes::Hash};

    use super::*;
    use crate::acoin::blockdata::transaction::coinbase;

    fn sample_block() -> Block {
        let tx = coinbase("sample", bitcoin::Amount::from_sat(1), &[0x03; 33]).unwrap();
        let merkle_root = TxMerkleNode::from_raw_hash(tx.compute_txid().to_raw_hash());
        let header = Header {
            version: Version::ONE,
            prev_blockhash: BlockHash::all_zeros(),
            merkle_root,
            time: 1_500_000_000,
            bits: CompactTarget::from_consensus(0x207fffff),
            nonce: 0,
        };
        Block::new(header, vec![tx])
    }

    #[test]
    fn test_block_accessors() {
        let block = sample_block();
        assert_eq!(block.transaction_count(), 1);
        assert_eq!(block.transactions().len(), 1);
        assert_eq!(block.header().time, 1_500_000_000);
        assert_eq!(block.block_hash(), block.header.block_hash());
    }

    #[test]
    fn test_merkle_root_agrees_with_bitcoin_block() {
        let block = sample_block();
        assert!(block.check_merkle_root());

        let ours = block.compute_merkle_root();
        let theirs = bitcoin::Block::from(block).compute_merkle_root();
        assert_eq!(ours, theirs);
    }

    #[test]
    fn test_tampered_merkle_root_detected() {
        let mut block = sample_block();
        block.header.merkle_root = TxMerkleNode::all_zeros();
        assert!(!block.check_merkle_root());
    }

    #[test]
    fn test_empty_block_has_no_merkle_root() {
        let mut block = sample_block();
        block.transactions.clear();
        assert_eq!(block.compute_merkle_root(), None);
        assert!(!block.check_merkle_root());
    }
}
