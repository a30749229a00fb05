// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod header;

//======================================================================================================================
// Exports
//======================================================================================================================

pub use self::header::{
    TcpFlag,
    TcpFlags,
    TcpHeader,
    MIN_TCP_HEADER_SIZE,
};
