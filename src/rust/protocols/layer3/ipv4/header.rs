// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//==============================================================================
// Imports
//==============================================================================

use crate::runtime::fail::Fail;
use ::std::{
    fmt,
    net::Ipv4Addr,
};

//==============================================================================
// Constants
//==============================================================================

/// Size of the fixed part of an IPv4 header (in bytes). Options are never parsed.
pub const IPV4_HEADER_SIZE: usize = 20;

/// Version number for IPv4.
pub const IPV4_VERSION: u8 = 4;

//==============================================================================
// Structures
//==============================================================================

/// IPv4 Datagram Header
///
/// Fields are kept as they appear on the wire. Nothing is validated: checksum, total length and
/// fragmentation are reported, not checked.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ipv4Header {
    /// Version (4 bits) and Internet Header Length (4 bits).
    version_ihl: u8,
    /// Type of service (8 bits).
    tos: u8,
    /// Total length of the packet including header and data (16 bits).
    total_length: u16,
    /// Used to identify the datagram to which a fragment belongs (16 bits).
    identification: u16,
    /// Control flags (3 bits) and fragment offset (13 bits).
    fragment: u16,
    /// Time to Live (8 bits).
    ttl: u8,
    /// Protocol used in the data portion of the datagram (8 bits).
    protocol: u8,
    /// Header-only checksum (16 bits).
    header_checksum: u16,
    // Source IP address (32 bits).
    src_addr: Ipv4Addr,
    /// Destination IP address (32 bits).
    dst_addr: Ipv4Addr,
}

//==============================================================================
// Associated Functions
//==============================================================================

/// Associated Functions for IPv4 Headers
impl Ipv4Header {
    /// Parses the fixed 20-byte IPv4 header at the front of [buf].
    pub fn parse(buf: &[u8]) -> Result<Self, Fail> {
        if buf.len() < IPV4_HEADER_SIZE {
            return Err(Fail::truncated_frame("ipv4 header truncated"));
        }
        let hdr_buf: &[u8] = &buf[..IPV4_HEADER_SIZE];

        Ok(Self {
            version_ihl: hdr_buf[0],
            tos: hdr_buf[1],
            total_length: u16::from_be_bytes([hdr_buf[2], hdr_buf[3]]),
            identification: u16::from_be_bytes([hdr_buf[4], hdr_buf[5]]),
            fragment: u16::from_be_bytes([hdr_buf[6], hdr_buf[7]]),
            ttl: hdr_buf[8],
            protocol: hdr_buf[9],
            header_checksum: u16::from_be_bytes([hdr_buf[10], hdr_buf[11]]),
            src_addr: Ipv4Addr::new(hdr_buf[12], hdr_buf[13], hdr_buf[14], hdr_buf[15]),
            dst_addr: Ipv4Addr::new(hdr_buf[16], hdr_buf[17], hdr_buf[18], hdr_buf[19]),
        })
    }

    /// Returns the raw version/IHL octet.
    pub fn version_ihl(&self) -> u8 {
        self.version_ihl
    }

    pub fn version(&self) -> u8 {
        self.version_ihl >> 4
    }

    /// Internet header length, in 32-bit words.
    pub fn ihl(&self) -> u8 {
        self.version_ihl & 0xf
    }

    /// Header size announced by the IHL field (in bytes).
    pub fn header_size(&self) -> usize {
        (self.ihl() as usize) << 2
    }

    pub fn tos(&self) -> u8 {
        self.tos
    }

    /// Differentiated services code point.
    pub fn dscp(&self) -> u8 {
        self.tos >> 2
    }

    /// Explicit congestion notification.
    pub fn ecn(&self) -> u8 {
        self.tos & 3
    }

    pub fn total_length(&self) -> u16 {
        self.total_length
    }

    pub fn identification(&self) -> u16 {
        self.identification
    }

    /// Returns the raw flags/fragment-offset field.
    pub fn fragment(&self) -> u16 {
        self.fragment
    }

    pub fn flags(&self) -> u8 {
        (self.fragment >> 13) as u8
    }

    pub fn fragment_offset(&self) -> u16 {
        self.fragment & 0x1fff
    }

    pub fn ttl(&self) -> u8 {
        self.ttl
    }

    /// Returns the protocol number, including values the decoder does not follow.
    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    pub fn header_checksum(&self) -> u16 {
        self.header_checksum
    }

    pub fn src_addr(&self) -> Ipv4Addr {
        self.src_addr
    }

    pub fn dst_addr(&self) -> Ipv4Addr {
        self.dst_addr
    }
}

//==============================================================================
// Trait Implementations
//==============================================================================

impl fmt::Display for Ipv4Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ipv4 {} -> {} proto={} ttl={} len={}",
            self.src_addr, self.dst_addr, self.protocol, self.ttl, self.total_length
        )
    }
}
