// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::fail::Fail;
use ::std::fmt;

//======================================================================================================================
// Constants
//======================================================================================================================

/// Size of a UDP header (in bytes).
pub const UDP_HEADER_SIZE: usize = 8;

//======================================================================================================================
// Structures
//======================================================================================================================

/// UDP Datagram Header
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UdpHeader {
    /// Port used on sender side (optional).
    src_port: u16,
    /// Port used receiver side.
    dest_port: u16,
    /// Length of header and payload, as announced by the sender.
    length: u16,
    /// Checksum, as found on the wire. Zero means none was computed.
    checksum: u16,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

/// Associate functions for UDP Datagram Headers
impl UdpHeader {
    /// Returns the source port stored in the target UDP header.
    pub fn src_port(&self) -> u16 {
        self.src_port
    }

    /// Returns the destination port stored in the target UDP header.
    pub fn dest_port(&self) -> u16 {
        self.dest_port
    }

    pub fn length(&self) -> u16 {
        self.length
    }

    pub fn checksum(&self) -> u16 {
        self.checksum
    }

    /// Parses the UDP header at the front of [buf]. Neither the length nor the checksum are checked.
    pub fn parse(buf: &[u8]) -> Result<Self, Fail> {
        // Malformed header.
        if buf.len() < UDP_HEADER_SIZE {
            return Err(Fail::truncated_frame("UDP header truncated"));
        }

        // Deserialize buffer.
        let hdr_buf: &[u8] = &buf[..UDP_HEADER_SIZE];
        let src_port: u16 = u16::from_be_bytes([hdr_buf[0], hdr_buf[1]]);
        let dest_port: u16 = u16::from_be_bytes([hdr_buf[2], hdr_buf[3]]);
        let length: u16 = u16::from_be_bytes([hdr_buf[4], hdr_buf[5]]);
        let checksum: u16 = u16::from_be_bytes([hdr_buf[6], hdr_buf[7]]);

        Ok(Self {
            src_port,
            dest_port,
            length,
            checksum,
        })
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl fmt::Display for UdpHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "udp {} -> {} len={}", self.src_port, self.dest_port, self.length)
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
