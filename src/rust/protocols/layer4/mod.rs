// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Exports
//======================================================================================================================

pub mod tcp;
pub mod udp;

pub use self::{
    tcp::TcpHeader,
    udp::UdpHeader,
};

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::protocols::layer3::IpProtocol;
use ::std::fmt;

//======================================================================================================================
// Structures
//======================================================================================================================

/// Transport-layer header of a frame. Which variant is present depends only on the IP protocol number.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransportHeader {
    Tcp(TcpHeader),
    Udp(UdpHeader),
    /// There is no IP header, or its protocol is not one the decoder follows.
    Absent,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl TransportHeader {
    pub fn protocol(&self) -> Option<IpProtocol> {
        match self {
            TransportHeader::Tcp(_) => Some(IpProtocol::TCP),
            TransportHeader::Udp(_) => Some(IpProtocol::UDP),
            TransportHeader::Absent => None,
        }
    }

    pub fn src_port(&self) -> Option<u16> {
        match self {
            TransportHeader::Tcp(hdr) => Some(hdr.src_port),
            TransportHeader::Udp(hdr) => Some(hdr.src_port()),
            TransportHeader::Absent => None,
        }
    }

    pub fn dst_port(&self) -> Option<u16> {
        match self {
            TransportHeader::Tcp(hdr) => Some(hdr.dst_port),
            TransportHeader::Udp(hdr) => Some(hdr.dest_port()),
            TransportHeader::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, TransportHeader::Absent)
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl fmt::Display for TransportHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransportHeader::Tcp(hdr) => write!(f, "{}", hdr),
            TransportHeader::Udp(hdr) => write!(f, "{}", hdr),
            TransportHeader::Absent => write!(f, "no transport header"),
        }
    }
}
