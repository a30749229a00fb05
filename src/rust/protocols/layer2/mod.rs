// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Exports
//======================================================================================================================

pub mod ethernet2;
pub use self::ethernet2::{
    header::{
        Ethernet2Header,
        LinkLayerAddresses,
        ETHERNET2_HEADER_SIZE,
    },
    protocol::EtherType2,
};
