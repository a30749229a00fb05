// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::{
    fail::Fail,
    network::types::MacAddress,
};
use ::std::fmt;

//======================================================================================================================
// Constants
//======================================================================================================================

pub const ETHERNET2_HEADER_SIZE: usize = 14;

/// Size of the two hardware addresses at the front of a frame.
const LINK_ADDRS_SIZE: usize = 12;

//======================================================================================================================
// Structures
//======================================================================================================================

/// Hardware addresses carried in the first 12 bytes of a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinkLayerAddresses {
    // Bytes 0..6
    src_addr: MacAddress,
    // Bytes 6..12
    dst_addr: MacAddress,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ethernet2Header {
    link_addrs: LinkLayerAddresses,
    // Reserved for 802.1Q. Never populated by parsing.
    vlan_tag: u32,
    // Bytes 12..14
    ether_type: u16,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl LinkLayerAddresses {
    pub fn new(src_addr: MacAddress, dst_addr: MacAddress) -> Self {
        Self { src_addr, dst_addr }
    }

    /// Reads both addresses from the front of [buf]. The first six octets are taken as the source.
    pub fn parse(buf: &[u8]) -> Result<Self, Fail> {
        if buf.len() < LINK_ADDRS_SIZE {
            return Err(Fail::truncated_frame("frame too small for link-layer addresses"));
        }
        let src_addr: MacAddress = MacAddress::from_bytes(&buf[0..6])?;
        let dst_addr: MacAddress = MacAddress::from_bytes(&buf[6..12])?;
        Ok(Self { src_addr, dst_addr })
    }

    pub fn src_addr(&self) -> MacAddress {
        self.src_addr
    }

    pub fn dst_addr(&self) -> MacAddress {
        self.dst_addr
    }
}

impl Ethernet2Header {
    /// Creates a header for an Ethernet frame.
    pub fn new(link_addrs: LinkLayerAddresses, ether_type: u16) -> Self {
        Self {
            link_addrs,
            vlan_tag: 0,
            ether_type,
        }
    }

    /// Parses the ethernet header at the front of [buf].
    pub fn parse(buf: &[u8]) -> Result<Self, Fail> {
        if buf.len() < ETHERNET2_HEADER_SIZE {
            return Err(Fail::truncated_frame("frame too small"));
        }
        let hdr_buf: &[u8] = &buf[..ETHERNET2_HEADER_SIZE];
        let link_addrs: LinkLayerAddresses = LinkLayerAddresses::parse(hdr_buf)?;
        let ether_type: u16 = u16::from_be_bytes([hdr_buf[12], hdr_buf[13]]);
        Ok(Self::new(link_addrs, ether_type))
    }

    pub fn link_addrs(&self) -> LinkLayerAddresses {
        self.link_addrs
    }

    pub fn src_addr(&self) -> MacAddress {
        self.link_addrs.src_addr
    }

    pub fn dst_addr(&self) -> MacAddress {
        self.link_addrs.dst_addr
    }

    /// Returns the EtherType exactly as found on the wire.
    ///
    /// Values other than IPv4 (0x0800) and IPv6 (0x86dd) are kept as they are, not reset to zero, so callers can
    /// tell an ARP frame (0x0806) from any other frame the decoder does not follow.
    pub fn ether_type(&self) -> u16 {
        self.ether_type
    }

    pub fn vlan_tag(&self) -> u32 {
        self.vlan_tag
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl fmt::Display for Ethernet2Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ethernet {} -> {} type=0x{:04x}",
            self.src_addr(),
            self.dst_addr(),
            self.ether_type
        )
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
