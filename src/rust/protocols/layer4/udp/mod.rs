// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod header;

//======================================================================================================================
// Exports
//======================================================================================================================

pub use self::header::{
    UdpHeader,
    UDP_HEADER_SIZE,
};
