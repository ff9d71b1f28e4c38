use thiserror::Error;

pub mod ip;
pub mod ipv4;
pub mod ipv6;
pub(crate) mod mask;
pub mod range;

/// Reasons an address or range string is refused.
///
/// Parsing is all-or-nothing: any deviation from the grammar yields an error
/// and no value. Misusing a constructor (mixing versions, oversized prefix in
/// `cidr`) is a caller bug and panics instead of surfacing here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The string is not a strict dotted-quad IPv4 address.
    #[error("not a valid IPv4 address")]
    InvalidIpv4,
    /// The string is not a valid colon-hex IPv6 address.
    #[error("not a valid IPv6 address")]
    InvalidIpv6,
    /// The string contains neither `.` nor `:`, so no address version applies.
    #[error("neither an IPv4 nor an IPv6 address")]
    UnknownFormat,
    /// The string follows none of `addr/prefix`, `start-end` or single-address syntax.
    #[error("not a valid address range")]
    InvalidRange,
    /// A CIDR prefix length lies outside the address version's bit width.
    #[error("prefix length out of range for the address version")]
    PrefixOutOfRange,
    /// Range endpoints belong to different address versions.
    #[error("range endpoints mix IPv4 and IPv6")]
    MixedVersions,
}
