// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

#![allow(dead_code)]

//======================================================================================================================
// Imports
//======================================================================================================================

use ::ethdecode::MacAddress;
use ::std::net::{
    Ipv4Addr,
    Ipv6Addr,
};

//======================================================================================================================
// Constants
//======================================================================================================================

pub const ALICE_MAC: MacAddress = MacAddress::new([0x12, 0x23, 0x45, 0x67, 0x89, 0xab]);
pub const ALICE_IPV4: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 1);
pub const ALICE_IPV6: Ipv6Addr = Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1);
pub const BOB_MAC: MacAddress = MacAddress::new([0xab, 0x89, 0x67, 0x45, 0x23, 0x12]);
pub const BOB_IPV4: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 2);
pub const BOB_IPV6: Ipv6Addr = Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 2);

pub const ETHERTYPE_IPV4: u16 = 0x0800;
pub const ETHERTYPE_IPV6: u16 = 0x86dd;
pub const PROTOCOL_TCP: u8 = 6;
pub const PROTOCOL_UDP: u8 = 17;

/// Captured IPv4/UDP frame, truncated right after the UDP header.
pub const CAPTURED_UDP_FRAME: [u8; 42] = [
    0, 208, 1, 255, 88, 0, 0, 22, 60, 194, 169, 171, 8, 0, 69, 0, 1, 44, 0, 0, 64, 0, 64, 17, 209, 88, 199, 58,
    161, 150, 197, 161, 57, 246, 200, 213, 38, 0, 1, 24, 166, 23,
];

//======================================================================================================================
// Structures
//======================================================================================================================

/// Fixed fields of a TCP header.
#[derive(Clone, Copy, Debug)]
pub struct TcpFields {
    pub src_port: u16,
    pub dst_port: u16,
    pub seq_num: u32,
    pub ack_num: u32,
    pub flags: u8,
    pub window_size: u16,
}

/// Fixed fields of a UDP header.
#[derive(Clone, Copy, Debug)]
pub struct UdpFields {
    pub src_port: u16,
    pub dst_port: u16,
    pub length: u16,
    pub checksum: u16,
}

/// Writes frames field by field, in network byte order.
pub struct FrameBuilder {
    buf: Vec<u8>,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl FrameBuilder {
    /// Starts a frame whose first address is [first] and whose second address is [second].
    pub fn ethernet(first: MacAddress, second: MacAddress, ether_type: u16) -> Self {
        let mut buf: Vec<u8> = Vec::with_capacity(128);
        buf.extend_from_slice(&first.octets());
        buf.extend_from_slice(&second.octets());
        buf.extend_from_slice(&ether_type.to_be_bytes());
        Self { buf }
    }

    pub fn ipv4(mut self, src: Ipv4Addr, dst: Ipv4Addr, protocol: u8, ttl: u8, identification: u16) -> Self {
        self.buf.push(0x45);
        self.buf.push(0x00);
        self.buf.extend_from_slice(&40u16.to_be_bytes());
        self.buf.extend_from_slice(&identification.to_be_bytes());
        self.buf.extend_from_slice(&0x4000u16.to_be_bytes());
        self.buf.push(ttl);
        self.buf.push(protocol);
        self.buf.extend_from_slice(&0u16.to_be_bytes());
        self.buf.extend_from_slice(&src.octets());
        self.buf.extend_from_slice(&dst.octets());
        self
    }

    pub fn ipv6(mut self, src: Ipv6Addr, dst: Ipv6Addr, next_header: u8, hop_limit: u8, flow_label: u32) -> Self {
        let version_class_flow: u32 = (6 << 28) | (flow_label & 0x000f_ffff);
        self.buf.extend_from_slice(&version_class_flow.to_be_bytes());
        self.buf.extend_from_slice(&20u16.to_be_bytes());
        self.buf.push(next_header);
        self.buf.push(hop_limit);
        self.buf.extend_from_slice(&src.octets());
        self.buf.extend_from_slice(&dst.octets());
        self
    }

    pub fn tcp(mut self, fields: TcpFields) -> Self {
        self.buf.extend_from_slice(&fields.src_port.to_be_bytes());
        self.buf.extend_from_slice(&fields.dst_port.to_be_bytes());
        self.buf.extend_from_slice(&fields.seq_num.to_be_bytes());
        self.buf.extend_from_slice(&fields.ack_num.to_be_bytes());
        self.buf.push(5 << 4);
        self.buf.push(fields.flags);
        self.buf.extend_from_slice(&fields.window_size.to_be_bytes());
        self.buf.extend_from_slice(&0u16.to_be_bytes());
        self.buf.extend_from_slice(&0u16.to_be_bytes());
        self
    }

    pub fn udp(mut self, fields: UdpFields) -> Self {
        self.buf.extend_from_slice(&fields.src_port.to_be_bytes());
        self.buf.extend_from_slice(&fields.dst_port.to_be_bytes());
        self.buf.extend_from_slice(&fields.length.to_be_bytes());
        self.buf.extend_from_slice(&fields.checksum.to_be_bytes());
        self
    }

    pub fn payload(mut self, data: &[u8]) -> Self {
        self.buf.extend_from_slice(data);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}
