/// Seed peers: DNS seed hosts and compiled-in fixed addresses.
pub mod seeds;

pub use bitcoin::p2p::ServiceFlags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::acoin::network::Network;

/// Network magic bytes to identify the network a message was intended for.
///
/// Every serialized peer-to-peer message starts with these four bytes, so
/// nodes on different networks reject each other's traffic outright.
#[derive(Debug, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize, Deserialize)]
pub struct Magic([u8; 4]);

impl Magic {
    /// A-Coin main network magic bytes.
    pub const MAIN: Self = Self([0xfb, 0xb5, 0x05, 0xdb]);
    /// A-Coin regression test network magic bytes.
    pub const REGTEST: Self = Self([0xfa, 0x0f, 0xa5, 0x5a]);
    /// A-Coin test network magic bytes.
    pub const TESTNET: Self = Self([0x1a, 0xee, 0xa5, 0x0d]);

    /// Creates a Magic value from raw bytes.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Returns the magic bytes as a 4-byte array.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.0
    }
}

impl From<Network> for Magic {
    fn from(network: Network) -> Self {
        match network {
            Network::Main => Magic::MAIN,
            Network::Testnet => Magic::TESTNET,
            Network::Regtest => Magic::REGTEST,
        }
    }
}

impl std::fmt::Display for Magic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Errors that can occur when working with magic bytes.
#[derive(Debug, PartialEq, Clone, Copy, Error)]
pub enum MagicError {
    /// The magic bytes don't correspond to any known network.
    #[error("unknown network magic: {0}")]
    UnknownMagic(Magic),
}

impl TryFrom<Magic> for Network {
    type Error = MagicError;

    fn try_from(magic: Magic) -> Result<Self, Self::Error> {
        match magic {
            Magic::MAIN => Ok(Network::Main),
            Magic::TESTNET => Ok(Network::Testnet),
            Magic::REGTEST => Ok(Network::Regtest),
            _ => Err(MagicError::UnknownMagic(magic)),
        }
    }
}
