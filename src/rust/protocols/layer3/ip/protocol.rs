// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//==============================================================================
// Imports
//==============================================================================

use crate::runtime::fail::Fail;
use ::libc::ENOTSUP;
use ::std::{
    convert::TryFrom,
    fmt,
};

//==============================================================================
// Structures
//==============================================================================

/// Transport protocols the decoder knows how to follow.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum IpProtocol {
    /// Transmission Control Protocol
    TCP = 0x06,
    /// User Datagram Protocol
    UDP = 0x11,
}

//==============================================================================
// Trait Implementations
//==============================================================================

/// TryFrom trait implementation.
impl TryFrom<u8> for IpProtocol {
    type Error = Fail;

    fn try_from(n: u8) -> Result<Self, Fail> {
        match n {
            0x06 => Ok(IpProtocol::TCP),
            0x11 => Ok(IpProtocol::UDP),
            _ => Err(Fail::new(ENOTSUP, "unsupported IP protocol")),
        }
    }
}

impl fmt::Display for IpProtocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpProtocol::TCP => write!(f, "tcp"),
            IpProtocol::UDP => write!(f, "udp"),
        }
    }
}

//==============================================================================
// Unit Tests
//==============================================================================
