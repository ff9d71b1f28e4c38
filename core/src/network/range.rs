//! # Address Ranges
//!
//! Normalizes the three textual range notations into one inclusive
//! `[first, last]` span:
//! * **CIDR**: `192.168.1.0/24`, `2001:db8::/48`
//! * **Explicit**: `10.0.0.1-10.0.0.50` (either order)
//! * **Singleton**: a bare address, spanning itself

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use super::ParseError;
use super::ip::Ip;

/// An inclusive span of same-version addresses.
///
/// Whatever the source notation, `first <= last` holds after construction;
/// descending inputs are swapped, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpRange {
    first: Ip,
    last: Ip,
}

/// Splits `addr/prefix` without constraining the address side. Digits-only
/// on the right keeps signs and whitespace out of the prefix.
fn cidr_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new("^([^/]+)/([0-9]+)$").expect("hard-coded CIDR pattern must compile"))
}

impl IpRange {
    /// Builds the inclusive range between two addresses of the same version,
    /// swapping them when given in descending order.
    ///
    /// # Panics
    ///
    /// Panics if the endpoints are of different versions. Mixing versions is
    /// a caller bug, not a parse failure; the range parser rejects it before
    /// reaching this constructor.
    pub fn new(first: Ip, last: Ip) -> Self {
        assert!(
            first.version() == last.version(),
            "range endpoints mix IPv{} and IPv{}",
            first.version(),
            last.version(),
        );
        if first > last {
            trace!("swapping descending range endpoints {first} and {last}");
            Self { first: last, last: first }
        } else {
            Self { first, last }
        }
    }

    /// Lowest address in the range.
    pub fn first(&self) -> Ip {
        self.first
    }

    /// Highest address in the range.
    pub fn last(&self) -> Ip {
        self.last
    }

    /// The version tag shared by both endpoints, `4` or `6`.
    pub fn version(&self) -> u8 {
        self.first.version()
    }

    /// Whether `addr` lies within the range. Addresses of the other version
    /// are never contained.
    pub fn contains(&self, addr: Ip) -> bool {
        addr.version() == self.version() && self.first <= addr && addr <= self.last
    }
}

impl FromStr for IpRange {
    type Err = ParseError;

    /// Accepts `addr/prefix`, `start-end`, or a bare address. A `/` anywhere
    /// selects the CIDR grammar; otherwise the first `-` splits an explicit
    /// range; otherwise the whole string must be a single address.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('/') {
            let parts = cidr_pattern().captures(s).ok_or(ParseError::InvalidRange)?;
            let addr: Ip = parts[1].parse()?;
            let prefix: u32 = parts[2].parse().map_err(|_| ParseError::PrefixOutOfRange)?;
            if prefix > addr.bit_width() {
                return Err(ParseError::PrefixOutOfRange);
            }
            let range = addr.cidr(prefix);
            trace!("expanded {s} to {range}");
            Ok(range)
        } else if let Some((start, end)) = s.split_once('-') {
            let first: Ip = start.parse()?;
            let last: Ip = end.parse()?;
            if first.version() != last.version() {
                return Err(ParseError::MixedVersions);
            }
            Ok(Self::new(first, last))
        } else {
            let addr: Ip = s.parse()?;
            Ok(Self::new(addr, addr))
        }
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
