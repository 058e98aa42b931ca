//! Turns a plain list of node addresses into the compiled-in seed table.
//!
//! One address per line: `ipv4`, `ipv4:port`, `ipv6` or `[ipv6]:port`. Blank
//! lines and `#` comments are skipped. Entries without a port get the
//! network's default P2P port.

use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeedGenError {
    #[error("line {line}: invalid address '{input}'")]
    InvalidAddress { line: usize, input: String },
}

/// A parsed seed entry, IPv4 addresses already mapped into IPv6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedEntry {
    pub addr: [u8; 16],
    pub port: u16,
}

fn to_mapped(ip: IpAddr) -> Ipv6Addr {
    match ip {
        IpAddr::V4(v4) => v4.to_ipv6_mapped(),
        IpAddr::V6(v6) => v6,
    }
}

pub fn parse_seed_line(input: &str, default_port: u16) -> Option<SeedEntry> {
    if let Ok(socket) = input.parse::<SocketAddr>() {
        return Some(SeedEntry { addr: to_mapped(socket.ip()).octets(), port: socket.port() });
    }
    input.parse::<IpAddr>().ok().map(|ip| SeedEntry { addr: to_mapped(ip).octets(), port: default_port })
}

pub fn parse_seed_list(content: &str, default_port: u16) -> Result<Vec<SeedEntry>, SeedGenError> {
    let mut entries = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let entry = parse_seed_line(line, default_port)
            .ok_or_else(|| SeedGenError::InvalidAddress { line: index + 1, input: line.to_string() })?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Renders entries as a `&[SeedSpec6]` constant
pub fn render_seed_table(name: &str, entries: &[SeedEntry]) -> String {
    let mut out = format!("pub const {}: &[SeedSpec6] = &[\n", name);
    for entry in entries {
        let bytes = entry.addr.iter().map(|b| format!("0x{:02x}", b)).collect::<Vec<_>>().join(", ");
        out.push_str(&format!("    SeedSpec6 {{ addr: [{}], port: {} }},\n", bytes, entry.port));
    }
    out.push_str("];\n");
    out
}
