// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::fail::Fail;
use ::libc::EINVAL;
use ::std::{
    fmt,
    str::FromStr,
};

//======================================================================================================================
// Structures
//======================================================================================================================

/// MAC Address
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(eui48::MacAddress);

//======================================================================================================================
// Associate Functions
//======================================================================================================================

impl MacAddress {
    pub const fn new(bytes: [u8; 6]) -> Self {
        MacAddress(eui48::MacAddress::new(bytes))
    }

    /// Builds a [MacAddress] from a slice holding exactly six octets.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Fail> {
        match eui48::MacAddress::from_bytes(bytes) {
            Ok(addr) => Ok(Self(addr)),
            Err(_) => Err(Fail::new(EINVAL, "MAC address must be six bytes long")),
        }
    }

    /// Returns the array of bytes composing the target [MacAddress].
    pub fn octets(&self) -> [u8; 6] {
        self.0.to_array()
    }

    pub fn to_canonical(self) -> String {
        self.0.to_canonical()
    }

    pub fn parse_canonical_str(canonical_macaddr_string: &str) -> Result<Self, Fail> {
        match eui48::MacAddress::parse_str(canonical_macaddr_string) {
            Ok(addr) => Ok(Self(addr)),
            Err(_) => Err(Fail::new(EINVAL, "failed to parse MAC Address")),
        }
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let octets: [u8; 6] = self.octets();
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            octets[0], octets[1], octets[2], octets[3], octets[4], octets[5]
        )
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MacAddress({})", &self.to_canonical())
    }
}

impl FromStr for MacAddress {
    type Err = Fail;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MacAddress::parse_canonical_str(s)
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
