//! # Version-Agnostic Addresses
//!
//! [`Ip`] folds both address versions into one orderable value so mixed
//! collections can be parsed, compared and sorted without the caller
//! matching on the version first.

use std::fmt;
use std::str::FromStr;

use super::ParseError;
use super::ipv4::Ipv4;
use super::ipv6::Ipv6;
use super::range::IpRange;

/// An address of either version.
///
/// `V4` is declared before `V6`, so the derived order places every IPv4
/// address strictly below every IPv6 address; within a version the numeric
/// address order applies. The resulting order is total and safe as a sort
/// key for mixed collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ip {
    V4(Ipv4),
    V6(Ipv6),
}

impl Ip {
    /// The version tag, `4` or `6`.
    pub fn version(&self) -> u8 {
        match self {
            Ip::V4(_) => 4,
            Ip::V6(_) => 6,
        }
    }

    /// Bits in an address of this version: 32 or 128.
    pub fn bit_width(&self) -> u32 {
        match self {
            Ip::V4(_) => Ipv4::BIT_WIDTH,
            Ip::V6(_) => Ipv6::BIT_WIDTH,
        }
    }

    /// The CIDR block spanned by the leading `prefix` bits of this address.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` exceeds [`Ip::bit_width`]. Validate untrusted
    /// prefix lengths before calling; [`IpRange`]'s parser does.
    pub fn cidr(&self, prefix: u32) -> IpRange {
        match self {
            Ip::V4(addr) => addr.cidr(prefix),
            Ip::V6(addr) => addr.cidr(prefix),
        }
    }
}

impl FromStr for Ip {
    type Err = ParseError;

    /// Routes on the separator: anything containing `:` is IPv6 territory
    /// (including trailing embedded IPv4), a `.` without `:` means IPv4, and
    /// a string with neither cannot be an address of any version.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            s.parse::<Ipv6>().map(Ip::V6)
        } else if s.contains('.') {
            s.parse::<Ipv4>().map(Ip::V4)
        } else {
            Err(ParseError::UnknownFormat)
        }
    }
}

impl fmt::Display for Ip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ip::V4(addr) => addr.fmt(f),
            Ip::V6(addr) => addr.fmt(f),
        }
    }
}

impl From<Ipv4> for Ip {
    fn from(addr: Ipv4) -> Self {
        Ip::V4(addr)
    }
}

impl From<Ipv6> for Ip {
    fn from(addr: Ipv6) -> Self {
        Ip::V6(addr)
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
