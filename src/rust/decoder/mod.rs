// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.


//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    protocols::{
        layer2::{
            Ethernet2Header,
            EtherType2,
            LinkLayerAddresses,
            ETHERNET2_HEADER_SIZE,
        },
        layer3::{
            IpHeader,
            IpProtocol,
            Ipv4Header,
            Ipv6Header,
        },
        layer4::{
            TcpHeader,
            TransportHeader,
            UdpHeader,
        },
    },
    runtime::fail::Fail,
};
use ::std::{
    convert::TryFrom,
    fmt,
};

//======================================================================================================================
// Structures
//======================================================================================================================

/// Headers decoded from a single frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    ethernet: Ethernet2Header,
    ip: IpHeader,
    transport: TransportHeader,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl DecodedFrame {
    pub fn ethernet(&self) -> &Ethernet2Header {
        &self.ethernet
    }

    pub fn link_addrs(&self) -> LinkLayerAddresses {
        self.ethernet.link_addrs()
    }

    pub fn ip(&self) -> &IpHeader {
        &self.ip
    }

    pub fn transport(&self) -> &TransportHeader {
        &self.transport
    }

    /// Splits the target frame into its three headers.
    pub fn into_parts(self) -> (Ethernet2Header, IpHeader, TransportHeader) {
        (self.ethernet, self.ip, self.transport)
    }
}

//======================================================================================================================
// Standalone Functions
//======================================================================================================================

/// Decodes the headers of the Ethernet frame in [buf].
///
/// The EtherType selects the IP header and the IP protocol number selects the transport header. A
/// discriminator the decoder does not follow yields [IpHeader::Absent] or [TransportHeader::Absent], which
/// is not an error. Headers are read at fixed offsets: IP options and IPv6 extension headers are never
/// skipped.
///
/// The raw EtherType is always reported through [Ethernet2Header::ether_type], even when it is not followed.
///
/// Fails only when [buf] ends before the header being read. No headers are returned in that case. The failure is
/// logged at debug level; reporting it is left to the caller.
pub fn decode(buf: &[u8]) -> Result<DecodedFrame, Fail> {
    let ethernet: Ethernet2Header = Ethernet2Header::parse(buf).map_err(|e| truncated(buf, e))?;
    trace!("decoded {:?}", ethernet);

    // The ethernet header parsed successfully, so the buffer extends at least up to the IP header.
    let ip_buf: &[u8] = &buf[ETHERNET2_HEADER_SIZE..];
    let ip: IpHeader = match EtherType2::from_octets(ethernet.ether_type().to_be_bytes()) {
        Some(EtherType2::Ipv4) => IpHeader::Ipv4(Ipv4Header::parse(ip_buf).map_err(|e| truncated(buf, e))?),
        Some(EtherType2::Ipv6) => IpHeader::Ipv6(Ipv6Header::parse(ip_buf).map_err(|e| truncated(buf, e))?),
        None => {
            debug!("unsupported ether type 0x{:04x}", ethernet.ether_type());
            return Ok(DecodedFrame {
                ethernet,
                ip: IpHeader::Absent,
                transport: TransportHeader::Absent,
            });
        },
    };
    trace!("decoded {:?}", ip);

    let transport: TransportHeader = decode_transport(buf, &ip)?;
    trace!("decoded {:?}", transport);

    Ok(DecodedFrame {
        ethernet,
        ip,
        transport,
    })
}

/// Decodes the transport header that follows [ip] in [buf].
fn decode_transport(buf: &[u8], ip: &IpHeader) -> Result<TransportHeader, Fail> {
    let protocol: u8 = match ip.next_protocol() {
        Some(protocol) => protocol,
        None => return Ok(TransportHeader::Absent),
    };
    // The IP header parsed successfully, so the buffer extends at least up to this offset.
    let offset: usize = ETHERNET2_HEADER_SIZE + ip.wire_size();
    match IpProtocol::try_from(protocol) {
        Ok(IpProtocol::TCP) => Ok(TransportHeader::Tcp(
            TcpHeader::parse(&buf[offset..]).map_err(|e| truncated(buf, e))?,
        )),
        Ok(IpProtocol::UDP) => Ok(TransportHeader::Udp(
            UdpHeader::parse(&buf[offset..]).map_err(|e| truncated(buf, e))?,
        )),
        Err(_) => {
            debug!("unsupported ip protocol {}", protocol);
            Ok(TransportHeader::Absent)
        },
    }
}

/// Logs a frame that ended early and hands the failure back.
fn truncated(buf: &[u8], e: Fail) -> Fail {
    debug!("dropping frame of {} bytes: {}", buf.len(), e.cause);
    e
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl From<DecodedFrame> for (Ethernet2Header, IpHeader, TransportHeader) {
    fn from(frame: DecodedFrame) -> Self {
        frame.into_parts()
    }
}

impl fmt::Display for DecodedFrame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.ethernet)?;
        if !self.ip.is_absent() {
            write!(f, " | {}", self.ip)?;
        }
        if !self.transport.is_absent() {
            write!(f, " | {}", self.transport)?;
        }
        Ok(())
    }
}
