// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod protocol;

//==============================================================================
// Exports
//==============================================================================

pub use self::protocol::IpProtocol;
