//! # IPv4 Addresses
//!
//! Strict dotted-quad parsing and canonical formatting. The grammar accepts
//! exactly four decimal groups in 0-255 joined by `.`, with no leading zeros
//! and no whitespace anywhere; everything else is a parse error.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use super::ParseError;
use super::ip::Ip;
use super::mask;
use super::range::IpRange;

/// An IPv4 address as four octets, most significant first.
///
/// Immutable once parsed; the derived order compares octet by octet, so
/// `9.0.0.0` sorts below `10.0.0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4 {
    octets: [u8; 4],
}

/// One decimal group: `0`, or 1-3 digits without a leading zero, max 255.
/// Spelled with `[0-9]` because the `regex` crate's `\d` also matches
/// non-ASCII digits.
const OCTET: &str = "(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])";

fn dotted_quad_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!("^{OCTET}\\.{OCTET}\\.{OCTET}\\.{OCTET}$"))
            .expect("hard-coded IPv4 pattern must compile")
    })
}

impl Ipv4 {
    /// Bits in an IPv4 address.
    pub const BIT_WIDTH: u32 = 32;

    pub(crate) const fn from_octets(octets: [u8; 4]) -> Self {
        Self { octets }
    }

    /// The four octets, most significant first.
    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// The CIDR block spanned by the leading `prefix` bits of this address.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` exceeds 32. Validate untrusted prefix lengths
    /// before calling; [`IpRange`]'s parser does.
    pub fn cidr(&self, prefix: u32) -> IpRange {
        assert!(
            prefix <= Self::BIT_WIDTH,
            "IPv4 prefix length {prefix} exceeds {} bits",
            Self::BIT_WIDTH
        );
        let first = Self::from_octets(mask::mask_words(self.octets, prefix, false));
        let last = Self::from_octets(mask::mask_words(self.octets, prefix, true));
        IpRange::new(Ip::V4(first), Ip::V4(last))
    }
}

impl FromStr for Ipv4 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups = dotted_quad_pattern()
            .captures(s)
            .ok_or(ParseError::InvalidIpv4)?;

        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            *octet = groups[i + 1].parse().map_err(|_| ParseError::InvalidIpv4)?;
        }
        Ok(Self { octets })
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")
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
