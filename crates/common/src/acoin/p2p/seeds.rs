//! Bootstrap peers.
//!
//! A node learns its first peers either from DNS seed hosts or from a short
//! list of IPv4 addresses compiled into the binary. The compiled-in list is
//! turned into peer-address records here; no network I/O happens.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use bitcoin::p2p::address::Address;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::acoin::p2p::ServiceFlags;

/// One week, in seconds.
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// A DNS seed used for peer discovery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    /// Display name of the seed.
    pub name: String,
    /// Hostname queried for peer addresses.
    pub host: String,
}

impl DnsSeed {
    /// Creates a seed entry whose name and host are the same string.
    pub fn new(host: &str) -> Self {
        Self {
            name: host.to_string(),
            host: host.to_string(),
        }
    }
}

/// A peer address record with a "last seen" time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedAddress {
    /// Socket address of the peer (IPv4 address and default port).
    pub address: SocketAddr,
    /// Services the peer is assumed to offer.
    pub services: ServiceFlags,
    /// Unix time, in seconds, the peer was last seen.
    pub last_seen: i64,
}

impl SeedAddress {
    /// Converts the peer address and services into their wire form.
    ///
    /// The last-seen time is not part of [`Address`]; use
    /// [`SeedAddress::to_addr_entry`] to keep it.
    pub fn to_p2p_address(&self) -> Address {
        Address::new(&self.address, self.services)
    }

    /// Converts the record into an `addr` message entry: the last-seen time
    /// as a 32-bit Unix timestamp followed by the address.
    ///
    /// Times before the epoch clamp to zero and times past 2106 clamp to
    /// `u32::MAX`.
    pub fn to_addr_entry(&self) -> (u32, Address) {
        let time = u32::try_from(self.last_seen.max(0)).unwrap_or(u32::MAX);
        (time, self.to_p2p_address())
    }
}

/// Decodes a compiled-in seed.
///
/// Seeds are stored as the in-memory image of an IPv4 address on a
/// little-endian host, so the least significant byte is the first octet.
pub fn seed_ip(raw: u32) -> Ipv4Addr {
    Ipv4Addr::from(raw.to_le_bytes())
}

/// Materializes compiled-in seeds using the current time and the thread RNG.
///
/// See [`materialize_fixed_seeds_at`].
pub fn materialize_fixed_seeds(raw_seeds: &[u32], port: u16) -> Vec<SeedAddress> {
    let now = chrono::Utc::now().timestamp();
    materialize_fixed_seeds_at(raw_seeds, port, now, &mut rand::rng())
}

/// Turns compiled-in IPv4 seeds into peer-address records.
///
/// Each record gets `port` and a "last seen" time uniformly drawn between
/// one and two weeks before `now`. Address management prefers recently seen
/// peers, so the stale timestamps keep bootstrap addresses from crowding out
/// addresses learned from live peers once the node is connected.
pub fn materialize_fixed_seeds_at<R: Rng>(
    raw_seeds: &[u32],
    port: u16,
    now: i64,
    rng: &mut R,
) -> Vec<SeedAddress> {
    raw_seeds
        .iter()
        .map(|&raw| {
            let age = rng.random_range(0..ONE_WEEK).saturating_add(ONE_WEEK);
            SeedAddress {
                address: SocketAddr::V4(SocketAddrV4::new(seed_ip(raw), port)),
                services: ServiceFlags::NETWORK,
                last_seen: now.saturating_sub(age),
            }
        })
        .collect()
}
