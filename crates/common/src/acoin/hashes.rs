pub use bitcoin::hashes::{Hash, HashEngine, sha256d::Hash as Sha256dHash};

/// Double-SHA256 of two hashes laid end to end.
///
/// This is the node combiner of the transaction merkle tree: `H(left || right)`
/// where `H` is SHA-256 applied twice.
pub fn hash_pair(left: &Sha256dHash, right: &Sha256dHash) -> Sha256dHash {
    let mut engine = Sha256dHash::engine();
    engine.input(left.as_byte_array());
    engine.input(right.as_byte_array());
    Sha256dHash::from_engine(engine)
}
