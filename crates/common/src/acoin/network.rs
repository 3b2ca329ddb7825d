use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::acoin::p2p::Magic;

/// Errors that can occur when parsing a chain type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChainTypeError {
    /// The provided chain type string is invalid.
    #[error("Invalid chain type: {0}")]
    InvalidChainType(String),
}

/// The A-Coin network variants.
///
/// The set is closed: adding a network is a code change, and every match
/// over it is exhaustive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network.
    #[serde(alias = "mainnet")]
    Main,
    /// Public test network.
    #[serde(rename = "test", alias = "testnet")]
    Testnet,
    /// Local regression-test network.
    Regtest,
}

impl Network {
    /// All networks, in selection-index order.
    pub const ALL: [Network; 3] = [Network::Main, Network::Testnet, Network::Regtest];

    /// Converts a magic value to the corresponding Network variant.
    ///
    /// # Arguments
    ///
    /// * `magic` - The magic bytes to convert
    ///
    /// # Returns
    ///
    /// * `Some(Network)` - The corresponding network if the magic is recognized
    /// * `None` - If the magic bytes don't match any known network
    pub fn from_magic(magic: Magic) -> Option<Network> {
        Network::try_from(magic).ok()
    }

    /// Returns the magic bytes for this network.
    pub fn magic(self) -> Magic {
        Magic::from(self)
    }

    /// Returns the string representation of this network.
    ///
    /// # Returns
    ///
    /// A string slice representing the network name
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ChainTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::try_from(s)
    }
}

impl TryFrom<&str> for Network {
    type Error = ChainTypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            other => Err(ChainTypeError::InvalidChainType(other.to_string())),
        }
    }
}

impl TryFrom<String> for Network {
    type Error = ChainTypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Network::try_from(s.as_str())
    }
}
