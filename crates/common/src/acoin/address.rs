//! Base58 version prefixes.
//!
//! The address codec prepends these bytes before Base58Check encoding, so
//! the first characters of an encoded string reveal both the kind of data
//! and the network it belongs to.

use serde::{Deserialize, Serialize};

/// The kinds of data the Base58 codec encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address.
    PubkeyAddress,
    /// Pay-to-script-hash address.
    ScriptAddress,
    /// WIF private key.
    SecretKey,
    /// BIP32 extended public key.
    ExtPublicKey,
    /// BIP32 extended private key.
    ExtSecretKey,
}

impl Base58Type {
    /// Every kind, in declaration order.
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

/// Version prefix bytes for each [`Base58Type`] on one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes {
    /// Prefix of pay-to-pubkey-hash addresses.
    pub pubkey_address: Vec<u8>,
    /// Prefix of pay-to-script-hash addresses.
    pub script_address: Vec<u8>,
    /// Prefix of WIF private keys.
    pub secret_key: Vec<u8>,
    /// Prefix of extended public keys.
    pub ext_public_key: Vec<u8>,
    /// Prefix of extended private keys.
    pub ext_secret_key: Vec<u8>,
}

impl Base58Prefixes {
    /// Returns the prefix bytes for `kind`.
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }
}
