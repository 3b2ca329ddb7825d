use std::sync::{
    OnceLock,
    atomic::{AtomicU8, Ordering},
};

use tracing::{info, warn};

use super::{ChainParams, ParamsError};
use crate::acoin::network::Network;

/// Holds the parameters of every network and remembers which one is active.
///
/// All three sets are built up front, so switching networks only swaps an
/// index. The active network starts as [`Network::Main`].
#[derive(Debug)]
pub struct ParamsSelector {
    main: ChainParams,
    testnet: ChainParams,
    regtest: ChainParams,
    active: AtomicU8,
}

impl ParamsSelector {
    /// Builds all networks' parameters, with the main network active.
    pub fn new() -> Result<Self, ParamsError> {
        let main = ChainParams::main()?;
        let testnet = ChainParams::testnet_from(&main)?;
        let regtest = ChainParams::regtest_from(&testnet)?;

        Ok(Self {
            main,
            testnet,
            regtest,
            active: AtomicU8::new(network_index(Network::Main)),
        })
    }

    /// Parameters of the active network.
    pub fn params(&self) -> &ChainParams {
        self.get(self.active_network())
    }

    /// Parameters of `network`, regardless of which one is active.
    pub fn get(&self, network: Network) -> &ChainParams {
        match network {
            Network::Main => &self.main,
            Network::Testnet => &self.testnet,
            Network::Regtest => &self.regtest,
        }
    }

    /// The active network.
    pub fn active_network(&self) -> Network {
        network_from_index(self.active.load(Ordering::Acquire))
    }

    /// Makes `network` the active network.
    pub fn select(&self, network: Network) {
        self.active.store(network_index(network), Ordering::Release);
        info!(%network, "selected chain parameters");
    }

    /// Selects the network named by the command-line flags.
    ///
    /// Neither flag selects the main network. Setting both is an error and
    /// leaves the active network unchanged.
    pub fn select_from_flags(&self, testnet: bool, regtest: bool) -> Result<Network, ParamsError> {
        let network = match (testnet, regtest) {
            (true, true) => {
                warn!(active = %self.active_network(), "conflicting network flags");
                return Err(ParamsError::ConflictingNetworks);
            }
            (false, true) => Network::Regtest,
            (true, false) => Network::Testnet,
            (false, false) => Network::Main,
        };

        self.select(network);
        Ok(network)
    }
}

fn network_index(network: Network) -> u8 {
    match network {
        Network::Main => 0,
        Network::Testnet => 1,
        Network::Regtest => 2,
    }
}

fn network_from_index(index: u8) -> Network {
    match index {
        0 => Network::Main,
        1 => Network::Testnet,
        2 => Network::Regtest,
        // Only `network_index` writes the atomic.
        other => unreachable!("unimplemented network index {other}"),
    }
}

static SELECTOR: OnceLock<ParamsSelector> = OnceLock::new();

/// Builds the process-wide parameter sets.
///
/// Call this once at startup so that a broken built-in constant is reported
/// as an error instead of a panic on first use. Later calls return the
/// already-built selector.
pub fn init() -> Result<&'static ParamsSelector, ParamsError> {
    if let Some(selector) = SELECTOR.get() {
        return Ok(selector);
    }
    let selector = ParamsSelector::new()?;
    Ok(SELECTOR.get_or_init(|| selector))
}

#[allow(clippy::panic, reason = "built-in constants are verified by init()")]
fn selector() -> &'static ParamsSelector {
    match init() {
        Ok(selector) => selector,
        Err(err) => panic!("built-in chain parameters are inconsistent: {err}"),
    }
}

/// Parameters of the process-wide active network.
///
/// # Panics
///
/// Panics if the built-in parameters fail validation. [`init`] reports the
/// same failure as an error.
pub fn params() -> &'static ChainParams {
    selector().params()
}

/// Switches the process-wide active network.
pub fn select_params(network: Network) {
    selector().select(network);
}

/// Switches the process-wide active network according to the
/// `-testnet`/`-regtest` flags.
///
/// Returns [`ParamsError::ConflictingNetworks`] without changing the
/// selection when both flags are set.
pub fn select_params_from_flags(testnet: bool, regtest: bool) -> Result<Network, ParamsError> {
    selector().select_from_flags(testnet, regtest)
}
