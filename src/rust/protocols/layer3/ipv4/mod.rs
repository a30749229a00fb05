// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod header;


//======================================================================================================================
// Exports
//======================================================================================================================

pub use self::header::{
    Ipv4Header,
    IPV4_HEADER_SIZE,
    IPV4_VERSION,
};
