//! # IPv6 Addresses
//!
//! Colon-hex parsing and canonical `::`-compressed formatting.
//!
//! The parser handles:
//! * Full eight-word spellings (`1:2:3:4:5:6:7:8`), case-insensitive.
//! * A single `::` elision standing for one or more zero words.
//! * A trailing embedded IPv4 suffix (`::ffff:192.0.2.1`), counted as the
//!   final two words. The suffix is accepted after any prefix that leaves
//!   room for it, but only in trailing position.
//!
//! Formatting always emits lowercase hex without leading zeros and never
//! re-emits a dotted suffix, so embedded-IPv4 spellings do not round-trip
//! textually (their values do).

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use super::ParseError;
use super::ip::Ip;
use super::ipv4::Ipv4;
use super::mask;
use super::range::IpRange;

/// An IPv6 address as eight 16-bit hextets, most significant first.
///
/// Immutable once parsed; the derived order compares hextet by hextet, so
/// `9::` sorts below `10::`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv6 {
    hextets: [u16; 8],
}

/// Shape gate ahead of word decoding: hex digits and colons only, bounded by
/// the shortest (`::`) and longest legal spellings.
fn colon_hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new("^[0-9a-fA-F:]{2,39}$").expect("hard-coded IPv6 pattern must compile")
    })
}

impl Ipv6 {
    /// Bits in an IPv6 address.
    pub const BIT_WIDTH: u32 = 128;

    pub(crate) const fn from_hextets(hextets: [u16; 8]) -> Self {
        Self { hextets }
    }

    /// The eight 16-bit words, most significant first.
    pub fn hextets(&self) -> [u16; 8] {
        self.hextets
    }

    /// The CIDR block spanned by the leading `prefix` bits of this address.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` exceeds 128. Validate untrusted prefix lengths
    /// before calling; [`IpRange`]'s parser does.
    pub fn cidr(&self, prefix: u32) -> IpRange {
        assert!(
            prefix <= Self::BIT_WIDTH,
            "IPv6 prefix length {prefix} exceeds {} bits",
            Self::BIT_WIDTH
        );
        let first = Self::from_hextets(mask::mask_words(self.hextets, prefix, false));
        let last = Self::from_hextets(mask::mask_words(self.hextets, prefix, true));
        IpRange::new(Ip::V6(first), Ip::V6(last))
    }
}

impl FromStr for Ipv6 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A trailing dotted-quad stands for the final two hextets. Re-parsing
        // with the `0:0` placeholder keeps the word count honest while the
        // general grammar runs; a trailing token that is not a well-formed
        // dotted-quad falls through to the hex grammar instead, where any
        // leftover `.` fails the charset gate.
        let last_colon = s.rfind(':').ok_or(ParseError::InvalidIpv6)?;
        if let Ok(embedded) = s[last_colon + 1..].parse::<Ipv4>() {
            let rewritten = format!("{}0:0", &s[..=last_colon]);
            let mut hextets = parse_hextets(&rewritten)?;
            let [b0, b1, b2, b3] = embedded.octets();
            hextets[6] = u16::from(b0) << 8 | u16::from(b1);
            hextets[7] = u16::from(b2) << 8 | u16::from(b3);
            return Ok(Self { hextets });
        }

        parse_hextets(s).map(|hextets| Self { hextets })
    }
}

/// Decodes a colon-hex spelling into exactly eight words, expanding a single
/// `::` elision into the zero run it stands for.
fn parse_hextets(s: &str) -> Result<[u16; 8], ParseError> {
    if !colon_hex_pattern().is_match(s) {
        return Err(ParseError::InvalidIpv6);
    }

    let elision = s.find("::");
    let (head, tail) = match elision {
        Some(at) => {
            if s[at + 1..].contains("::") {
                // A second elision would make the expansion ambiguous.
                return Err(ParseError::InvalidIpv6);
            }
            (&s[..at], &s[at + 2..])
        }
        None => (s, ""),
    };

    let head = parse_hex_words(head)?;
    let tail = parse_hex_words(tail)?;

    if elision.is_none() && head.len() != 8 {
        return Err(ParseError::InvalidIpv6);
    }
    // `::` stands for at least one zero word, never zero.
    if elision.is_some() && head.len() + tail.len() > 7 {
        return Err(ParseError::InvalidIpv6);
    }

    let mut hextets = [0u16; 8];
    hextets[..head.len()].copy_from_slice(&head);
    hextets[8 - tail.len()..].copy_from_slice(&tail);
    Ok(hextets)
}

/// Splits a segment on `:` into 16-bit words; each piece must be 1-4 hex
/// digits. An empty segment decodes to no words at all.
fn parse_hex_words(s: &str) -> Result<Vec<u16>, ParseError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(':')
        .map(|piece| {
            if piece.is_empty() || piece.len() > 4 {
                return Err(ParseError::InvalidIpv6);
            }
            u16::from_str_radix(piece, 16).map_err(|_| ParseError::InvalidIpv6)
        })
        .collect()
}

/// The run of consecutive zero words to elide as `::`: the longest of length
/// two or more, leftmost on ties. A single zero word never qualifies.
fn longest_zero_run(hextets: &[u16; 8]) -> Option<(usize, usize)> {
    let mut run = 0;
    let mut best: Option<(usize, usize)> = None;
    for (i, &word) in hextets.iter().enumerate() {
        if word != 0 {
            run = 0;
            continue;
        }
        run += 1;
        if run > 1 && best.map_or(true, |(_, len)| run > len) {
            best = Some((i + 1 - run, run));
        }
    }
    best
}

fn write_hex_words(f: &mut fmt::Formatter<'_>, words: &[u16]) -> fmt::Result {
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            f.write_str(":")?;
        }
        write!(f, "{word:x}")?;
    }
    Ok(())
}

impl fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match longest_zero_run(&self.hextets) {
            Some((start, len)) => {
                write_hex_words(f, &self.hextets[..start])?;
                f.write_str("::")?;
                write_hex_words(f, &self.hextets[start + len..])
            }
            None => write_hex_words(f, &self.hextets),
        }
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
