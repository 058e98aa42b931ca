//! Transport-level peer addresses as understood by peer discovery.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

/// An IP address in its 16-byte wire form. IPv4 peers use the IPv4-mapped
/// (`::ffff:a.b.c.d`) range.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpAddress(pub Ipv6Addr);

impl IpAddress {
    pub const fn from_octets(octets: [u8; 16]) -> Self {
        Self(Ipv6Addr::new(
            u16::from_be_bytes([octets[0], octets[1]]),
            u16::from_be_bytes([octets[2], octets[3]]),
            u16::from_be_bytes([octets[4], octets[5]]),
            u16::from_be_bytes([octets[6], octets[7]]),
            u16::from_be_bytes([octets[8], octets[9]]),
            u16::from_be_bytes([octets[10], octets[11]]),
            u16::from_be_bytes([octets[12], octets[13]]),
            u16::from_be_bytes([octets[14], octets[15]]),
        ))
    }

    pub fn octets(&self) -> [u8; 16] {
        self.0.octets()
    }

    pub fn is_ipv4(&self) -> bool {
        self.0.to_ipv4_mapped().is_some()
    }

    /// Unmaps IPv4-mapped addresses so they render and connect as IPv4.
    pub fn to_canonical(&self) -> IpAddr {
        match self.0.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(self.0),
        }
    }
}

impl From<IpAddr> for IpAddress {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Self(v4.to_ipv6_mapped()),
            IpAddr::V6(v6) => Self(v6),
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_canonical(), f)
    }
}

impl fmt::Debug for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A peer address record: where to reach a peer and when it was last seen (unix seconds).
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetAddress {
    pub ip: IpAddress,
    pub port: u16,
    pub timestamp: u64,
}

impl NetAddress {
    pub fn new(ip: IpAddress, port: u16, timestamp: u64) -> Self {
        Self { ip, port, timestamp }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip.to_canonical(), self.port)
    }
}

impl fmt::Display for NetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.socket_addr(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn ipv4_mapped_octets_unmap() {
        let mut octets = [0u8; 16];
        octets[10] = 0xff;
        octets[11] = 0xff;
        octets[12..].copy_from_slice(&[203, 0, 113, 7]);
        let ip = IpAddress::from_octets(octets);
        assert!(ip.is_ipv4());
        assert_eq!(ip.to_canonical(), IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)));
        assert_eq!(ip.octets(), octets);
        assert_eq!(IpAddress::from(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7))), ip);
    }

    #[test]
    fn ipv6_stays_ipv6() {
        let v6: Ipv6Addr = "2001:db8::1".parse().unwrap();
        let ip = IpAddress::from_octets(v6.octets());
        assert!(!ip.is_ipv4());
        assert_eq!(ip.to_string(), "2001:db8::1");
    }

    #[test]
    fn net_address_renders_as_socket() {
        let ip = IpAddress::from(IpAddr::V4(Ipv4Addr::new(198, 51, 100, 1)));
        let addr = NetAddress::new(ip, 9037, 0);
        assert_eq!(addr.to_string(), "198.51.100.1:9037");
        let v6 = NetAddress::new("2001:db8::2".parse::<IpAddr>().unwrap().into(), 9037, 0);
        assert_eq!(v6.to_string(), "[2001:db8::2]:9037");
    }

    #[test]
    fn serializes_camel_case() {
        let ip = IpAddress::from(IpAddr::V4(Ipv4Addr::new(198, 51, 100, 1)));
        let json = serde_json::to_value(NetAddress::new(ip, 1, 2)).unwrap();
        assert_eq!(json["port"], 1);
        assert_eq!(json["timestamp"], 2);
        assert_eq!(json["ip"], "::ffff:198.51.100.1");
    }
}
