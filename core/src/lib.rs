//! # Rangr Core
//!
//! Strict parsing, canonical formatting, total ordering and range expansion
//! for textual IPv4 and IPv6 addresses.
//!
//! Everything enters through [`FromStr`](std::str::FromStr): addresses parse
//! as [`Ipv4`], [`Ipv6`] or the version-agnostic [`Ip`], and `addr/prefix`,
//! `start-end` or single-host notation parses as [`IpRange`]. Values are
//! immutable, `Copy`, and order numerically with every IPv4 address sorting
//! below every IPv6 address, so a mixed collection sorts deterministically.
//! [`Display`](std::fmt::Display) renders the canonical spelling, with `::`
//! compression for IPv6.

pub use self::network::ParseError;
pub use self::network::ip::Ip;
pub use self::network::ipv4::Ipv4;
pub use self::network::ipv6::Ipv6;
pub use self::network::range::IpRange;

pub mod network;
