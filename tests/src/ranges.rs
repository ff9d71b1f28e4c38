#![cfg(test)]
//! Range notation: CIDR expansion, explicit spans, singletons, and the
//! rejection of everything in between.

use anyhow::Result;
use rangr_core::{Ip, IpRange, Ipv4, ParseError};

#[test]
fn cidr_expands_to_network_and_broadcast() -> Result<()> {
    let block: IpRange = "1.2.3.255/25".parse()?;
    assert_eq!(block.first().to_string(), "1.2.3.128");
    assert_eq!(block.last().to_string(), "1.2.3.255");
    assert_eq!(block.version(), 4);

    let block: IpRange = "1:2:3:ffff:5:6:7:8/49".parse()?;
    assert_eq!(block.first().to_string(), "1:2:3:8000::");
    assert_eq!(block.last().to_string(), "1:2:3:ffff:ffff:ffff:ffff:ffff");
    assert_eq!(block.version(), 6);
    Ok(())
}

#[test]
fn cidr_method_and_notation_agree() -> Result<()> {
    let addr: Ipv4 = "172.16.5.10".parse()?;
    let via_method = addr.cidr(20);
    let via_text: IpRange = "172.16.5.10/20".parse()?;
    assert_eq!(via_method, via_text);
    assert_eq!(via_method.first().to_string(), "172.16.0.0");
    assert_eq!(via_method.last().to_string(), "172.16.15.255");
    Ok(())
}

#[test]
fn cidr_edges_cover_everything_or_one_host() -> Result<()> {
    let all: IpRange = "0.0.0.0/0".parse()?;
    assert_eq!(all.first().to_string(), "0.0.0.0");
    assert_eq!(all.last().to_string(), "255.255.255.255");

    let host: IpRange = "203.0.113.7/32".parse()?;
    assert_eq!(host.first(), host.last());

    let everything_v6: IpRange = "::/0".parse()?;
    assert_eq!(everything_v6.first().to_string(), "::");
    assert_eq!(
        everything_v6.last().to_string(),
        "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"
    );

    let host_v6: IpRange = "2001:db8::1/128".parse()?;
    assert_eq!(host_v6.first(), host_v6.last());
    Ok(())
}

#[test]
fn explicit_ranges_normalize_their_order() -> Result<()> {
    let forward: IpRange = "1.2.3.4-2.2.3.4".parse()?;
    let reversed: IpRange = "2.2.3.4-1.2.3.4".parse()?;
    assert_eq!(forward, reversed);
    assert_eq!(reversed.first().to_string(), "1.2.3.4");
    assert_eq!(reversed.last().to_string(), "2.2.3.4");

    let v6: IpRange = "2001:db8::5-2001:db8::1".parse()?;
    assert_eq!(v6.first().to_string(), "2001:db8::1");
    assert_eq!(v6.last().to_string(), "2001:db8::5");
    Ok(())
}

#[test]
fn singletons_span_themselves() -> Result<()> {
    let single: IpRange = "192.168.1.5".parse()?;
    assert_eq!(single.first(), single.last());
    assert_eq!(single.first(), "192.168.1.5".parse::<Ip>()?);

    let single_v6: IpRange = "::1".parse()?;
    assert_eq!(single_v6.first().to_string(), "::1");
    assert_eq!(single_v6.last().to_string(), "::1");
    Ok(())
}

#[test]
fn prefix_lengths_are_bounded_by_the_version() {
    assert_eq!("0.0.0.0/33".parse::<IpRange>(), Err(ParseError::PrefixOutOfRange));
    assert_eq!("::/129".parse::<IpRange>(), Err(ParseError::PrefixOutOfRange));
    // far past any width, including values that overflow small integers
    assert!("0.0.0.0/4294967296999".parse::<IpRange>().is_err());
}

#[test]
fn mixed_version_endpoints_are_refused() {
    assert_eq!("1.2.3.4-1::2".parse::<IpRange>(), Err(ParseError::MixedVersions));
    assert_eq!("::1-10.0.0.1".parse::<IpRange>(), Err(ParseError::MixedVersions));
}

#[test]
fn malformed_ranges_are_refused() {
    for bad in [
        "",
        "1.2.3.4/",
        "/24",
        "1.2.3.4/x",
        "1.2.3.4/+24",
        "10.0.0.1-",
        "-10.0.0.1",
        "10.0.0.1-10.0.0.2-10.0.0.3",
        "10.0.0.256-1.1.1.1",
        "1.2.3.4.5/24",
        "1::4::8/64",
    ] {
        assert!(bad.parse::<IpRange>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn containment_follows_the_normalized_bounds() -> Result<()> {
    let block: IpRange = "10.0.0.0/24".parse()?;
    assert!(block.contains("10.0.0.0".parse()?));
    assert!(block.contains("10.0.0.255".parse()?));
    assert!(!block.contains("10.0.1.0".parse()?));
    assert!(!block.contains("9.255.255.255".parse()?));
    // the other version is never contained, even though it compares higher
    assert!(!block.contains("::".parse()?));

    let span: IpRange = "2001:db8::1-2001:db8::ff".parse()?;
    assert!(span.contains("2001:db8::80".parse()?));
    assert!(!span.contains("2001:db8::100".parse()?));
    Ok(())
}
