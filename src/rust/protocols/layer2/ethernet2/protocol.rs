// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use crate::runtime::fail::Fail;
use ::libc::ENOTSUP;
use ::std::convert::TryFrom;

/// EtherType values the decoder knows how to follow.
#[repr(u16)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EtherType2 {
    Ipv4 = 0x0800,
    Ipv6 = 0x86dd,
}

impl EtherType2 {
    /// Matches the two discriminator octets as they appear on the wire.
    pub fn from_octets(octets: [u8; 2]) -> Option<Self> {
        match octets {
            [0x08, 0x00] => Some(EtherType2::Ipv4),
            [0x86, 0xdd] => Some(EtherType2::Ipv6),
            _ => None,
        }
    }
}

impl TryFrom<u16> for EtherType2 {
    type Error = Fail;

    fn try_from(n: u16) -> Result<Self, Fail> {
        match Self::from_octets(n.to_be_bytes()) {
            Some(ether_type) => Ok(ether_type),
            None => Err(Fail::new(ENOTSUP, "unsupported ETHERTYPE")),
        }
    }
}
