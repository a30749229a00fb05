// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::fail::Fail;
use ::std::{
    fmt,
    net::Ipv6Addr,
};

//======================================================================================================================
// Constants
//======================================================================================================================

/// Size of an IPv6 header (in bytes). Extension headers are never parsed.
pub const IPV6_HEADER_SIZE: usize = 40;

/// Version number for IPv6.
pub const IPV6_VERSION: u8 = 6;

//======================================================================================================================
// Structures
//======================================================================================================================

/// IPv6 Packet Header
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ipv6Header {
    /// Version (4 bits), traffic class (8 bits) and flow label (20 bits).
    version_class_flow: u32,
    /// Length of everything after this header (16 bits).
    payload_length: u16,
    /// Protocol of the header that follows (8 bits).
    next_header: u8,
    hop_limit: u8,
    src_addr: Ipv6Addr,
    dst_addr: Ipv6Addr,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Ipv6Header {
    /// Parses the fixed 40-byte IPv6 header at the front of [buf].
    pub fn parse(buf: &[u8]) -> Result<Self, Fail> {
        if buf.len() < IPV6_HEADER_SIZE {
            return Err(Fail::truncated_frame("ipv6 header truncated"));
        }
        let hdr_buf: &[u8] = &buf[..IPV6_HEADER_SIZE];

        let version_class_flow: u32 = u32::from_be_bytes([hdr_buf[0], hdr_buf[1], hdr_buf[2], hdr_buf[3]]);
        let payload_length: u16 = u16::from_be_bytes([hdr_buf[4], hdr_buf[5]]);
        let next_header: u8 = hdr_buf[6];
        let hop_limit: u8 = hdr_buf[7];

        let mut src_octets: [u8; 16] = [0; 16];
        src_octets.copy_from_slice(&hdr_buf[8..24]);
        let mut dst_octets: [u8; 16] = [0; 16];
        dst_octets.copy_from_slice(&hdr_buf[24..40]);

        Ok(Self {
            version_class_flow,
            payload_length,
            next_header,
            hop_limit,
            src_addr: Ipv6Addr::from(src_octets),
            dst_addr: Ipv6Addr::from(dst_octets),
        })
    }

    /// Returns the raw version/traffic-class/flow-label word.
    pub fn version_class_flow(&self) -> u32 {
        self.version_class_flow
    }

    pub fn version(&self) -> u8 {
        (self.version_class_flow >> 28) as u8
    }

    pub fn traffic_class(&self) -> u8 {
        (self.version_class_flow >> 20) as u8
    }

    pub fn flow_label(&self) -> u32 {
        self.version_class_flow & 0x000f_ffff
    }

    pub fn payload_length(&self) -> u16 {
        self.payload_length
    }

    /// Returns the next-header value, including values the decoder does not follow.
    pub fn next_header(&self) -> u8 {
        self.next_header
    }

    pub fn hop_limit(&self) -> u8 {
        self.hop_limit
    }

    pub fn src_addr(&self) -> Ipv6Addr {
        self.src_addr
    }

    pub fn dst_addr(&self) -> Ipv6Addr {
        self.dst_addr
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl fmt::Display for Ipv6Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ipv6 {} -> {} next={} hop_limit={} len={}",
            self.src_addr, self.dst_addr, self.next_header, self.hop_limit, self.payload_length
        )
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
