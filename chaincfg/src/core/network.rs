// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Network descriptors: where a toolchain should connect and which chain it expects to find.

use std::{fmt, net::IpAddr, str::FromStr};

use alloy_primitives::Address;

/// Sentinel accepted in place of a numeric network id, meaning "accept any".
pub const WILDCARD: &str = "*";

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("invalid host {0:?}: expected an IP address or hostname")]
    InvalidHost(String),
    #[error("port {0} is out of range (expected 1-65535)")]
    PortOutOfRange(i64),
    #[error("invalid network id {0:?}: expected a numeric chain id or \"*\"")]
    InvalidNetworkId(String),
}

/// A syntactically valid network address: an IP literal or an RFC 1123 hostname.
///
/// The text is kept exactly as written.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Host(String);

impl Host {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The host as an IP address, if it is an IP literal.
    pub fn ip(&self) -> Option<IpAddr> {
        self.0.parse().ok()
    }
}

impl FromStr for Host {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.parse::<IpAddr>().is_ok() || is_hostname(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(NetworkError::InvalidHost(s.to_string()))
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_hostname(s: &str) -> bool {
    let s = s.strip_suffix('.').unwrap_or(s);
    if s.is_empty() || s.len() > MAX_HOSTNAME_LEN {
        return false;
    }
    let labels_ok = s.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    });
    // All-numeric names are malformed IPv4 literals, not hostnames
    let numeric = s.split('.').all(|label| label.bytes().all(|b| b.is_ascii_digit()));
    labels_ok && !numeric
}

/// A TCP port in `1..=65535`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Port(u16);

impl Port {
    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for Port {
    type Error = NetworkError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u16::try_from(value) {
            Ok(port) if port != 0 => Ok(Self(port)),
            _ => Err(NetworkError::PortOutOfRange(value)),
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The chain a network descriptor expects to talk to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetworkId {
    /// `*`: accept whatever network id the remote declares.
    Any,
    Id(u64),
}

impl NetworkId {
    /// Whether a remote declaring `remote_id` satisfies this network id.
    pub fn accepts(&self, remote_id: u64) -> bool {
        match self {
            Self::Any => true,
            Self::Id(id) => *id == remote_id,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl FromStr for NetworkId {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == WILDCARD {
            return Ok(Self::Any);
        }
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NetworkError::InvalidNetworkId(s.to_string()));
        }
        s.parse()
            .map(Self::Id)
            .map_err(|_| NetworkError::InvalidNetworkId(s.to_string()))
    }
}

impl TryFrom<i64> for NetworkId {
    type Error = NetworkError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self::Id)
            .map_err(|_| NetworkError::InvalidNetworkId(value.to_string()))
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(WILDCARD),
            Self::Id(id) => fmt::Display::fmt(id, f),
        }
    }
}

/// A named network entry: endpoint plus optional deployment defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkDescriptor {
    pub(crate) host: Host,
    pub(crate) port: Port,
    pub(crate) network_id: NetworkId,
    pub(crate) gas: Option<u64>,
    pub(crate) gas_price: Option<u64>,
    pub(crate) from: Option<Address>,
}

impl NetworkDescriptor {
    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn port(&self) -> Port {
        self.port
    }

    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    /// Gas limit to use for deployments on this network.
    pub fn gas(&self) -> Option<u64> {
        self.gas
    }

    /// Gas price in wei.
    pub fn gas_price(&self) -> Option<u64> {
        self.gas_price
    }

    /// Default sender for transactions on this network.
    pub fn from(&self) -> Option<Address> {
        self.from
    }

    /// HTTP RPC endpoint for this network.
    pub fn endpoint(&self) -> String {
        match self.host.ip() {
            Some(IpAddr::V6(ip)) => format!("http://[{ip}]:{}", self.port),
            _ => format!("http://{}:{}", self.host, self.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosts() {
        for ok in [
            "192.168.0.2",
            "127.0.0.1",
            "localhost",
            "ganache",
            "rpc.example-chain.io",
            "node-1.internal.",
            "::1",
            "fe80::1",
        ] {
            assert_eq!(ok.parse::<Host>().unwrap().as_str(), ok);
        }
        for bad in [
            "",
            "192.168.0.999",
            "1.2.3",
            "-leading.example",
            "trailing-.example",
            "under_score",
            "has space",
            "http://localhost",
            "localhost:8545",
            "a..b",
        ] {
            assert_eq!(
                bad.parse::<Host>(),
                Err(NetworkError::InvalidHost(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
        let long_label = "a".repeat(64);
        assert!(long_label.parse::<Host>().is_err());
        let long_name = vec!["abc"; 64].join(".");
        assert!(long_name.len() > MAX_HOSTNAME_LEN);
        assert!(long_name.parse::<Host>().is_err());
    }

    #[test]
    fn ports() {
        assert_eq!(Port::try_from(8545).unwrap().get(), 8545);
        assert_eq!(Port::try_from(1).unwrap().get(), 1);
        assert_eq!(Port::try_from(65535).unwrap().get(), 65535);
        for bad in [0, -1, 65536, i64::MAX] {
            assert_eq!(Port::try_from(bad), Err(NetworkError::PortOutOfRange(bad)));
        }
    }

    #[test]
    fn network_ids() {
        assert_eq!("*".parse::<NetworkId>().unwrap(), NetworkId::Any);
        assert_eq!("5777".parse::<NetworkId>().unwrap(), NetworkId::Id(5777));
        assert_eq!(NetworkId::try_from(1).unwrap(), NetworkId::Id(1));
        for bad in ["", "any", "**", "-1", "+1", " 1", "0x1", "99999999999999999999999"] {
            assert!(bad.parse::<NetworkId>().is_err(), "{bad:?} should be rejected");
        }
        assert!(NetworkId::try_from(-5).is_err());
    }

    #[test]
    fn network_id_accepts() {
        assert!(NetworkId::Any.accepts(1));
        assert!(NetworkId::Any.accepts(5777));
        assert!(NetworkId::Id(5777).accepts(5777));
        assert!(!NetworkId::Id(5777).accepts(1));
        assert_eq!(NetworkId::Any.to_string(), "*");
        assert_eq!(NetworkId::Id(42).to_string(), "42");
    }

    #[test]
    fn endpoints() {
        let mut network = NetworkDescriptor {
            host: "192.168.0.2".parse().unwrap(),
            port: Port::try_from(8545).unwrap(),
            network_id: NetworkId::Any,
            gas: None,
            gas_price: None,
            from: None,
        };
        assert_eq!(network.endpoint(), "http://192.168.0.2:8545");

        network.host = "::1".parse().unwrap();
        assert_eq!(network.endpoint(), "http://[::1]:8545");

        network.host = "localhost".parse().unwrap();
        assert_eq!(network.endpoint(), "http://localhost:8545");
    }
}
