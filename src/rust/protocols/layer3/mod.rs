// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Exports
//======================================================================================================================

pub mod ip;
pub mod ipv4;
pub mod ipv6;

pub use self::{
    ip::IpProtocol,
    ipv4::Ipv4Header,
    ipv6::Ipv6Header,
};

//======================================================================================================================
// Imports
//======================================================================================================================

use ::std::fmt;

//======================================================================================================================
// Structures
//======================================================================================================================

/// Network-layer header of a frame. Which variant is present depends only on the EtherType.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IpHeader {
    Ipv4(Ipv4Header),
    Ipv6(Ipv6Header),
    /// The EtherType is not one the decoder follows.
    Absent,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl IpHeader {
    /// Returns the IP version implied by the variant, regardless of the version bits on the wire.
    pub fn version(&self) -> Option<u8> {
        match self {
            IpHeader::Ipv4(_) => Some(ipv4::IPV4_VERSION),
            IpHeader::Ipv6(_) => Some(ipv6::IPV6_VERSION),
            IpHeader::Absent => None,
        }
    }

    /// Returns the protocol number (IPv4) or next-header value (IPv6) that selects the transport header.
    pub fn next_protocol(&self) -> Option<u8> {
        match self {
            IpHeader::Ipv4(hdr) => Some(hdr.protocol()),
            IpHeader::Ipv6(hdr) => Some(hdr.next_header()),
            IpHeader::Absent => None,
        }
    }

    /// Returns the number of bytes the decoder consumes for this header.
    pub fn wire_size(&self) -> usize {
        match self {
            IpHeader::Ipv4(_) => ipv4::IPV4_HEADER_SIZE,
            IpHeader::Ipv6(_) => ipv6::IPV6_HEADER_SIZE,
            IpHeader::Absent => 0,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, IpHeader::Absent)
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl fmt::Display for IpHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpHeader::Ipv4(hdr) => write!(f, "{}", hdr),
            IpHeader::Ipv6(hdr) => write!(f, "{}", hdr),
            IpHeader::Absent => write!(f, "no ip header"),
        }
    }
}
