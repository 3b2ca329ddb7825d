//! A-Coin network parameter library.
//!
//! This library defines the immutable identity of each A-Coin network
//! (magic bytes, ports, genesis block, seeds, address prefixes) and the
//! process-wide switch that picks exactly one of them for the lifetime of
//! a node.

#![cfg_attr(test, allow(clippy::arithmetic_side_effects))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::cast_sign_loss))]
#![cfg_attr(test, allow(clippy::indexing_slicing))]
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::cast_possible_truncation))]

/// Types and functions related to the A-Coin protocol.
pub mod acoin;

pub use acoin::chainparams::{
    ChainParams, ParamsError, ParamsSelector, init, params, select_params,
    select_params_from_flags,
};
pub use acoin::network::Network;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
