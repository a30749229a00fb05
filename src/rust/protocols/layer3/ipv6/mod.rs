// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod header;

//======================================================================================================================
// Exports
//======================================================================================================================

pub use self::header::{
    Ipv6Header,
    IPV6_HEADER_SIZE,
    IPV6_VERSION,
};
