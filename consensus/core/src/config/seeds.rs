//! Compiled-in bootstrap peers and their expansion into address records.

use buy_utils::networking::{IpAddress, NetAddress};
use buy_utils::time::ONE_WEEK_SECS;
use rand::Rng;
use tracing::debug;

/// A fixed seed node in compact form: a 16-byte IPv6 (or IPv4-mapped) address and a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

/// Expands compact seed records into address records, preserving order.
///
/// Seeds are hints rather than freshly observed peers, so each one is given a
/// random last-seen time between one and two weeks before `now`. Spreading the
/// ages keeps peer selection from treating them as one cluster.
pub fn convert_seed6<R: Rng + ?Sized>(seeds: &[SeedSpec6], now: u64, rng: &mut R) -> Vec<NetAddress> {
    let addresses: Vec<NetAddress> = seeds
        .iter()
        .map(|seed| {
            let age = rng.gen_range(0..ONE_WEEK_SECS) + ONE_WEEK_SECS;
            NetAddress::new(IpAddress::from_octets(seed.addr), seed.port, now.saturating_sub(age))
        })
        .collect();
    debug!(count = addresses.len(), "expanded fixed seed table");
    addresses
}

// Placeholder documentation-range addresses (RFC 5737, RFC 3849), not real
// bootstrap peers. Replace with `generate_seeds` output once the node list is
// available.
pub const MAINNET_SEEDS: &[SeedSpec6] = &[
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xc6, 0x33, 0x64, 0x11], port: 9037 },
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xc6, 0x33, 0x64, 0x2a], port: 9037 },
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xcb, 0x00, 0x71, 0x05], port: 9037 },
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xcb, 0x00, 0x71, 0x4d], port: 9037 },
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xc0, 0x00, 0x02, 0x94], port: 9037 },
    SeedSpec6 { addr: [0x20, 0x01, 0x0d, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x25], port: 9037 },
];

pub const TESTNET_SEEDS: &[SeedSpec6] = &[];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NOW: u64 = 1_700_000_000;

    #[test]
    fn preserves_length_and_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let addresses = convert_seed6(MAINNET_SEEDS, NOW, &mut rng);
        assert_eq!(addresses.len(), MAINNET_SEEDS.len());
        for (seed, address) in MAINNET_SEEDS.iter().zip(&addresses) {
            assert_eq!(address.ip.octets(), seed.addr);
            assert_eq!(address.port, seed.port);
        }
    }

    #[test]
    fn timestamps_fall_between_one_and_two_weeks_ago() {
        let mut rng = StdRng::seed_from_u64(42);
        let seeds = vec![MAINNET_SEEDS[0]; 500];
        for address in convert_seed6(&seeds, NOW, &mut rng) {
            assert!(address.timestamp > NOW - 2 * ONE_WEEK_SECS);
            assert!(address.timestamp <= NOW - ONE_WEEK_SECS);
        }
    }

    #[test]
    fn no_deduplication() {
        let mut rng = StdRng::seed_from_u64(1);
        let seeds = [MAINNET_SEEDS[0], MAINNET_SEEDS[0]];
        assert_eq!(convert_seed6(&seeds, NOW, &mut rng).len(), 2);
    }

    #[test]
    fn empty_table() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(convert_seed6(TESTNET_SEEDS, NOW, &mut rng).is_empty());
    }

    #[test]
    fn ipv4_seeds_render_unmapped() {
        let mut rng = StdRng::seed_from_u64(3);
        let addresses = convert_seed6(&MAINNET_SEEDS[..1], NOW, &mut rng);
        assert_eq!(addresses[0].socket_addr().to_string(), "198.51.100.17:9037");
    }
}
