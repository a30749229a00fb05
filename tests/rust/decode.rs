// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod common;

//======================================================================================================================
// Imports
//======================================================================================================================

use ::anyhow::Result;
use ::ethdecode::{
    decode,
    ensure_eq,
    ensure_neq,
    runtime::logging,
    DecodedFrame,
    IpHeader,
    IpProtocol,
    TransportHeader,
};
use ::rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};
use common::{
    FrameBuilder,
    TcpFields,
    UdpFields,
    ALICE_IPV4,
    ALICE_IPV6,
    ALICE_MAC,
    BOB_IPV4,
    BOB_IPV6,
    BOB_MAC,
    CAPTURED_UDP_FRAME,
    ETHERTYPE_IPV4,
    ETHERTYPE_IPV6,
    PROTOCOL_TCP,
    PROTOCOL_UDP,
};

//======================================================================================================================
// Constants
//======================================================================================================================

const NUM_RANDOM_FRAMES: usize = 256;
const RANDOM_SEED: u64 = 0x0ddc0ffee;

//======================================================================================================================
// Helper Functions
//======================================================================================================================

fn random_tcp(rng: &mut SmallRng) -> TcpFields {
    TcpFields {
        src_port: rng.gen(),
        dst_port: rng.gen(),
        seq_num: rng.gen(),
        ack_num: rng.gen(),
        flags: rng.gen(),
        window_size: rng.gen(),
    }
}

fn random_udp(rng: &mut SmallRng) -> UdpFields {
    UdpFields {
        src_port: rng.gen(),
        dst_port: rng.gen(),
        length: rng.gen(),
        checksum: rng.gen(),
    }
}

/// Any protocol number other than TCP and UDP.
fn random_other_protocol(rng: &mut SmallRng) -> u8 {
    loop {
        let protocol: u8 = rng.gen();
        if protocol != PROTOCOL_TCP && protocol != PROTOCOL_UDP {
            return protocol;
        }
    }
}

/// Checks that every strict prefix of [frame] fails as a truncated frame.
fn check_prefixes_are_truncated(frame: &[u8]) -> Result<()> {
    for len in 0..frame.len() {
        match decode(&frame[..len]) {
            Ok(decoded) => anyhow::bail!("decoded {} from a {}-byte prefix", decoded, len),
            Err(e) => ensure_eq!(e.is_truncated_frame(), true),
        }
    }
    Ok(())
}

//======================================================================================================================
// Tests
//======================================================================================================================

#[test]
fn captured_udp_frame() -> Result<()> {
    logging::initialize();
    let (ethernet, ip, transport) = decode(&CAPTURED_UDP_FRAME)?.into_parts();
    ensure_eq!(ethernet.ether_type(), ETHERTYPE_IPV4);
    ensure_eq!(ip.version(), Some(4));
    ensure_eq!(transport.protocol(), Some(IpProtocol::UDP));
    ensure_eq!(transport.src_port(), Some(0xc8d5));
    ensure_eq!(transport.dst_port(), Some(0x2600));
    Ok(())
}

#[test]
fn ipv4_udp_frames() -> Result<()> {
    logging::initialize();
    let mut rng: SmallRng = SmallRng::seed_from_u64(RANDOM_SEED);
    for _ in 0..NUM_RANDOM_FRAMES {
        let udp: UdpFields = random_udp(&mut rng);
        let frame: Vec<u8> = FrameBuilder::ethernet(ALICE_MAC, BOB_MAC, ETHERTYPE_IPV4)
            .ipv4(ALICE_IPV4, BOB_IPV4, PROTOCOL_UDP, rng.gen(), rng.gen())
            .udp(udp)
            .build();

        let decoded: DecodedFrame = decode(&frame)?;
        ensure_eq!(decoded.ethernet().src_addr(), ALICE_MAC);
        ensure_eq!(decoded.ethernet().dst_addr(), BOB_MAC);
        ensure_eq!(decoded.ip().version(), Some(4));
        match decoded.transport() {
            TransportHeader::Udp(hdr) => {
                ensure_eq!(hdr.src_port(), udp.src_port);
                ensure_eq!(hdr.dest_port(), udp.dst_port);
                ensure_eq!(hdr.length(), udp.length);
                ensure_eq!(hdr.checksum(), udp.checksum);
            },
            other => anyhow::bail!("expected a UDP header, got {:?}", other),
        }
    }
    Ok(())
}

#[test]
fn ipv4_tcp_frames() -> Result<()> {
    logging::initialize();
    let mut rng: SmallRng = SmallRng::seed_from_u64(RANDOM_SEED + 1);
    for _ in 0..NUM_RANDOM_FRAMES {
        let tcp: TcpFields = random_tcp(&mut rng);
        let identification: u16 = rng.gen();
        let frame: Vec<u8> = FrameBuilder::ethernet(BOB_MAC, ALICE_MAC, ETHERTYPE_IPV4)
            .ipv4(BOB_IPV4, ALICE_IPV4, PROTOCOL_TCP, 64, identification)
            .tcp(tcp)
            .payload(b"GET / HTTP/1.1\r\n")
            .build();

        let decoded: DecodedFrame = decode(&frame)?;
        match decoded.ip() {
            IpHeader::Ipv4(hdr) => {
                ensure_eq!(hdr.identification(), identification);
                ensure_eq!(hdr.src_addr(), BOB_IPV4);
                ensure_eq!(hdr.dst_addr(), ALICE_IPV4);
            },
            other => anyhow::bail!("expected an IPv4 header, got {:?}", other),
        }
        ensure_eq!(decoded.transport().protocol(), Some(IpProtocol::TCP));
        match decoded.transport() {
            TransportHeader::Tcp(hdr) => {
                ensure_eq!(hdr.src_port, tcp.src_port);
                ensure_eq!(hdr.dst_port, tcp.dst_port);
                ensure_eq!(hdr.seq_num, tcp.seq_num);
                ensure_eq!(hdr.ack_num, tcp.ack_num);
                ensure_eq!(hdr.flags, tcp.flags);
                ensure_eq!(hdr.window_size, tcp.window_size);
                ensure_eq!(hdr.iter_flags().count(), tcp.flags.count_ones() as usize);
            },
            other => anyhow::bail!("expected a TCP header, got {:?}", other),
        }
    }
    Ok(())
}

#[test]
fn ipv6_frames() -> Result<()> {
    logging::initialize();
    let mut rng: SmallRng = SmallRng::seed_from_u64(RANDOM_SEED + 2);
    for _ in 0..NUM_RANDOM_FRAMES {
        let flow_label: u32 = rng.gen::<u32>() & 0x000f_ffff;
        let builder: FrameBuilder = FrameBuilder::ethernet(ALICE_MAC, BOB_MAC, ETHERTYPE_IPV6);
        let (frame, expected): (Vec<u8>, IpProtocol) = if rng.gen() {
            let tcp: TcpFields = random_tcp(&mut rng);
            let frame: Vec<u8> = builder
                .ipv6(ALICE_IPV6, BOB_IPV6, PROTOCOL_TCP, 64, flow_label)
                .tcp(tcp)
                .build();
            (frame, IpProtocol::TCP)
        } else {
            let udp: UdpFields = random_udp(&mut rng);
            let frame: Vec<u8> = builder
                .ipv6(ALICE_IPV6, BOB_IPV6, PROTOCOL_UDP, 64, flow_label)
                .udp(udp)
                .build();
            (frame, IpProtocol::UDP)
        };

        let decoded: DecodedFrame = decode(&frame)?;
        match decoded.ip() {
            IpHeader::Ipv6(hdr) => {
                ensure_eq!(hdr.version(), 6);
                ensure_eq!(hdr.flow_label(), flow_label);
                ensure_eq!(hdr.src_addr(), ALICE_IPV6);
                ensure_eq!(hdr.dst_addr(), BOB_IPV6);
            },
            other => anyhow::bail!("expected an IPv6 header, got {:?}", other),
        }
        ensure_eq!(decoded.transport().protocol(), Some(expected));
    }
    Ok(())
}

#[test]
fn unknown_ether_types() -> Result<()> {
    logging::initialize();
    let mut rng: SmallRng = SmallRng::seed_from_u64(RANDOM_SEED + 3);
    for _ in 0..NUM_RANDOM_FRAMES {
        let ether_type: u16 = rng.gen();
        if ether_type == ETHERTYPE_IPV4 || ether_type == ETHERTYPE_IPV6 {
            continue;
        }
        // Even a well-formed IPv4 packet behind an unknown EtherType is not followed.
        let frame: Vec<u8> = FrameBuilder::ethernet(ALICE_MAC, BOB_MAC, ether_type)
            .ipv4(ALICE_IPV4, BOB_IPV4, PROTOCOL_UDP, 64, 0)
            .build();
        let decoded: DecodedFrame = decode(&frame)?;
        ensure_eq!(decoded.ethernet().ether_type(), ether_type);
        ensure_eq!(decoded.link_addrs().src_addr(), ALICE_MAC);
        ensure_eq!(*decoded.ip(), IpHeader::Absent);
        ensure_eq!(*decoded.transport(), TransportHeader::Absent);
    }
    Ok(())
}

#[test]
fn unknown_ip_protocols() -> Result<()> {
    logging::initialize();
    let mut rng: SmallRng = SmallRng::seed_from_u64(RANDOM_SEED + 4);
    for _ in 0..NUM_RANDOM_FRAMES {
        let protocol: u8 = random_other_protocol(&mut rng);
        let frame: Vec<u8> = FrameBuilder::ethernet(ALICE_MAC, BOB_MAC, ETHERTYPE_IPV4)
            .ipv4(ALICE_IPV4, BOB_IPV4, protocol, 64, 0)
            .payload(&[0xa5; 32])
            .build();
        let decoded: DecodedFrame = decode(&frame)?;
        ensure_neq!(*decoded.ip(), IpHeader::Absent);
        ensure_eq!(decoded.ip().next_protocol(), Some(protocol));
        ensure_eq!(decoded.transport().is_absent(), true);

        let frame: Vec<u8> = FrameBuilder::ethernet(ALICE_MAC, BOB_MAC, ETHERTYPE_IPV6)
            .ipv6(ALICE_IPV6, BOB_IPV6, protocol, 64, 0)
            .build();
        let decoded: DecodedFrame = decode(&frame)?;
        ensure_eq!(decoded.ip().version(), Some(6));
        ensure_eq!(decoded.transport().is_absent(), true);
    }
    Ok(())
}

#[test]
fn truncated_frames() -> Result<()> {
    logging::initialize();
    let mut rng: SmallRng = SmallRng::seed_from_u64(RANDOM_SEED + 5);
    let frames: [Vec<u8>; 4] = [
        FrameBuilder::ethernet(ALICE_MAC, BOB_MAC, ETHERTYPE_IPV4)
            .ipv4(ALICE_IPV4, BOB_IPV4, PROTOCOL_UDP, 64, 0)
            .udp(random_udp(&mut rng))
            .build(),
        FrameBuilder::ethernet(ALICE_MAC, BOB_MAC, ETHERTYPE_IPV4)
            .ipv4(ALICE_IPV4, BOB_IPV4, PROTOCOL_TCP, 64, 0)
            .tcp(random_tcp(&mut rng))
            .build(),
        FrameBuilder::ethernet(ALICE_MAC, BOB_MAC, ETHERTYPE_IPV6)
            .ipv6(ALICE_IPV6, BOB_IPV6, PROTOCOL_UDP, 64, 0)
            .udp(random_udp(&mut rng))
            .build(),
        FrameBuilder::ethernet(ALICE_MAC, BOB_MAC, ETHERTYPE_IPV6)
            .ipv6(ALICE_IPV6, BOB_IPV6, PROTOCOL_TCP, 64, 0)
            .tcp(random_tcp(&mut rng))
            .build(),
    ];
    // Minimum lengths: 14 + 20 + 8, 14 + 20 + 20, 14 + 40 + 8 and 14 + 40 + 20.
    let minimums: [usize; 4] = [42, 54, 62, 74];
    for (frame, minimum) in frames.iter().zip(minimums) {
        ensure_eq!(frame.len(), minimum);
        check_prefixes_are_truncated(frame)?;
        decode(frame)?;
    }
    Ok(())
}
