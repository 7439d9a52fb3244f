//! Allowed origins for the origin filter.
//!
//! The set is computed once at startup from explicit addresses/CIDR ranges
//! and, optionally, the IPv4 addresses of the host's own network interfaces.
//! It is never refreshed, so interface changes after startup are not seen.

use crate::config::AccessConfig;
use crate::error::{BridgeError, Result};
use std::collections::HashSet;
use std::net::IpAddr;
use std::str::FromStr;
use tracing::{info, warn};

/// An address range in CIDR notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    addr: IpAddr,
    prefix: u8,
}

impl Network {
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (self.addr, ip) {
            (IpAddr::V4(net), IpAddr::V4(ip)) => {
                let mask = u32::MAX.checked_shl(32 - u32::from(self.prefix)).unwrap_or(0);
                u32::from(net) & mask == u32::from(ip) & mask
            }
            (IpAddr::V6(net), IpAddr::V6(ip)) => {
                let mask = u128::MAX.checked_shl(128 - u32::from(self.prefix)).unwrap_or(0);
                u128::from(net) & mask == u128::from(ip) & mask
            }
            _ => false,
        }
    }
}

impl FromStr for Network {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || BridgeError::Config(format!("Invalid network: {}", s));

        let (addr, prefix) = s.split_once('/').ok_or_else(invalid)?;
        let parsed: IpAddr = addr.trim().parse().map_err(|_| invalid())?;
        let mut prefix: u8 = prefix.trim().parse().map_err(|_| invalid())?;
        let max = if parsed.is_ipv4() { 32 } else { 128 };
        if prefix > max {
            return Err(invalid());
        }

        // An IPv4-mapped range (`::ffff:a.b.c.d/n`) is stored as IPv4 with
        // the 96-bit mapping prefix removed.
        let addr = parsed.to_canonical();
        if parsed.is_ipv6() && addr.is_ipv4() {
            prefix = prefix.checked_sub(96).ok_or_else(invalid)?;
        }

        Ok(Self { addr, prefix })
    }
}

/// Client addresses permitted by the origin filter.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins {
    addresses: HashSet<IpAddr>,
    networks: Vec<Network>,
}

impl AllowedOrigins {
    /// Build the set from configuration, enumerating local interfaces when
    /// `allow_local_interfaces` is set.
    pub fn from_config(config: &AccessConfig) -> Result<Self> {
        let mut origins = Self::default();

        for entry in &config.allowed_origins {
            origins.allow_entry(entry)?;
        }

        if config.allow_local_interfaces {
            let local = local_ipv4_addresses();
            info!("Allowing {} local interface address(es)", local.len());
            origins.addresses.extend(local);
        }

        if origins.is_empty() {
            warn!("Origin filter enabled with an empty allowlist; every request will be rejected");
        }

        Ok(origins)
    }

    /// Add a single address (`192.168.1.10`) or range (`10.0.0.0/8`).
    pub fn allow_entry(&mut self, entry: &str) -> Result<()> {
        if entry.contains('/') {
            self.networks.push(entry.parse()?);
        } else {
            let addr: IpAddr = entry
                .trim()
                .parse()
                .map_err(|_| BridgeError::Config(format!("Invalid address: {}", entry)))?;
            self.addresses.insert(addr.to_canonical());
        }
        Ok(())
    }

    pub fn allow(&mut self, addr: IpAddr) {
        self.addresses.insert(addr.to_canonical());
    }

    pub fn contains(&self, addr: IpAddr) -> bool {
        let addr = addr.to_canonical();
        self.addresses.contains(&addr) || self.networks.iter().any(|n| n.contains(addr))
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty() && self.networks.is_empty()
    }
}

/// IPv4 addresses of every network interface on this host.
pub fn local_ipv4_addresses() -> HashSet<IpAddr> {
    match local_ip_address::list_afinet_netifas() {
        Ok(interfaces) => interfaces
            .into_iter()
            .map(|(_name, ip)| ip)
            .filter(IpAddr::is_ipv4)
            .collect(),
        Err(e) => {
            warn!("Failed to enumerate network interfaces: {}", e);
            HashSet::new()
        }
    }
}
