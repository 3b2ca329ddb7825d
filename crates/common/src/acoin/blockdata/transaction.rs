//! Coinbase transactions.

pub use bitcoin::Transaction;
use bitcoin::{
    Amount, OutPoint, ScriptBuf, Sequence, TxIn, TxOut, Witness,
    absolute::LockTime,
    opcodes::all::OP_CHECKSIG,
    script::{Builder, PushBytesBuf, PushBytesError},
    transaction::Version,
};

/// Compact difficulty bits recorded at the start of a genesis coinbase
/// script.
pub const COINBASE_SCRIPT_BITS: i64 = 486_604_799;

/// Extra-nonce byte pushed after the bits in a genesis coinbase script.
pub const COINBASE_EXTRA_NONCE: u8 = 4;

fn push_bytes(bytes: &[u8]) -> Result<PushBytesBuf, PushBytesError> {
    PushBytesBuf::try_from(bytes.to_vec())
}

/// Builds the input script of a genesis coinbase.
///
/// The script holds the compact bits, a one-byte extra nonce pushed as data
/// (not as a small-integer opcode), and the embedded timestamp text.
pub fn coinbase_script_sig(timestamp: &str) -> Result<ScriptBuf, PushBytesError> {
    Ok(Builder::new()
        .push_int(COINBASE_SCRIPT_BITS)
        .push_slice(push_bytes(&[COINBASE_EXTRA_NONCE])?)
        .push_slice(push_bytes(timestamp.as_bytes())?)
        .into_script())
}

/// Builds a pay-to-pubkey output script: `<key> OP_CHECKSIG`.
///
/// The key is pushed verbatim, without checking that it is a valid curve
/// point.
pub fn pay_to_pubkey_script(key: &[u8]) -> Result<ScriptBuf, PushBytesError> {
    Ok(Builder::new()
        .push_slice(push_bytes(key)?)
        .push_opcode(OP_CHECKSIG)
        .into_script())
}

/// Builds a coinbase transaction with one input carrying `timestamp` and one
/// output paying `reward` to `output_key`.
///
/// The input spends the null outpoint, so the output has no spendable
/// history.
pub fn coinbase(
    timestamp: &str,
    reward: Amount,
    output_key: &[u8],
) -> Result<Transaction, PushBytesError> {
    Ok(Transaction {
        version: Version::ONE,
        lock_time: LockTime::ZERO,
        input: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig: coinbase_script_sig(timestamp)?,
            sequence: Sequence::MAX,
            witness: Witness::default(),
        }],
        output: vec![TxOut {
            value: reward,
            script_pubkey: pay_to_pubkey_script(output_key)?,
        }],
    })
}
