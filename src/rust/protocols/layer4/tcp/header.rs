// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use crate::runtime::fail::Fail;
use ::bit_iter::BitIter;
use ::std::fmt;

/// Size of the fixed part of a TCP header (in bytes). Options are never parsed.
pub const MIN_TCP_HEADER_SIZE: usize = 20;

/// Control bits of octet 13, indexed by bit position.
const TCP_FLAGS: [TcpFlag; 8] = [
    TcpFlag::Fin,
    TcpFlag::Syn,
    TcpFlag::Rst,
    TcpFlag::Psh,
    TcpFlag::Ack,
    TcpFlag::Urg,
    TcpFlag::Ece,
    TcpFlag::Cwr,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TcpFlag {
    Fin,
    Syn,
    Rst,
    Psh,
    Ack,
    Urg,
    Ece,
    Cwr,
}

impl TcpFlag {
    pub fn name(&self) -> &'static str {
        match self {
            TcpFlag::Fin => "FIN",
            TcpFlag::Syn => "SYN",
            TcpFlag::Rst => "RST",
            TcpFlag::Psh => "PSH",
            TcpFlag::Ack => "ACK",
            TcpFlag::Urg => "URG",
            TcpFlag::Ece => "ECE",
            TcpFlag::Cwr => "CWR",
        }
    }
}

/// Iterator over the flags set in a TCP header, lowest bit first.
pub struct TcpFlags(BitIter<u8>);

impl Iterator for TcpFlags {
    type Item = TcpFlag;

    fn next(&mut self) -> Option<TcpFlag> {
        self.0.next().map(|bit: usize| TCP_FLAGS[bit])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpHeader {
    pub src_port: u16,
    pub dst_port: u16,
    pub seq_num: u32,
    pub ack_num: u32,

    // Octet 12: [ data offset in u32s (4 bits) ][ reserved zeros (3 bits) ] [ NS flag ]
    pub offset_reserved: u8,

    // Octet 13: [ CWR ] [ ECE ] [ URG ] [ ACK ] [ PSH ] [ RST ] [ SYN ] [ FIN ]
    pub flags: u8,

    pub window_size: u16,
    pub checksum: u16,
    pub urgent_pointer: u16,
}

impl TcpHeader {
    /// Parses the fixed part of the TCP header at the front of [buf]. The data offset is reported, not
    /// followed.
    pub fn parse(buf: &[u8]) -> Result<Self, Fail> {
        if buf.len() < MIN_TCP_HEADER_SIZE {
            return Err(Fail::truncated_frame("TCP header truncated"));
        }
        let hdr_buf: &[u8] = &buf[..MIN_TCP_HEADER_SIZE];

        Ok(Self {
            src_port: u16::from_be_bytes([hdr_buf[0], hdr_buf[1]]),
            dst_port: u16::from_be_bytes([hdr_buf[2], hdr_buf[3]]),
            seq_num: u32::from_be_bytes([hdr_buf[4], hdr_buf[5], hdr_buf[6], hdr_buf[7]]),
            ack_num: u32::from_be_bytes([hdr_buf[8], hdr_buf[9], hdr_buf[10], hdr_buf[11]]),
            offset_reserved: hdr_buf[12],
            flags: hdr_buf[13],
            window_size: u16::from_be_bytes([hdr_buf[14], hdr_buf[15]]),
            checksum: u16::from_be_bytes([hdr_buf[16], hdr_buf[17]]),
            urgent_pointer: u16::from_be_bytes([hdr_buf[18], hdr_buf[19]]),
        })
    }

    /// Header size announced by the data offset field (in bytes).
    pub fn data_offset(&self) -> usize {
        (self.offset_reserved >> 4) as usize * 4
    }

    pub fn ns(&self) -> bool {
        (self.offset_reserved & 1) != 0
    }

    pub fn cwr(&self) -> bool {
        (self.flags & (1 << 7)) != 0
    }

    pub fn ece(&self) -> bool {
        (self.flags & (1 << 6)) != 0
    }

    pub fn urg(&self) -> bool {
        (self.flags & (1 << 5)) != 0
    }

    pub fn ack(&self) -> bool {
        (self.flags & (1 << 4)) != 0
    }

    pub fn psh(&self) -> bool {
        (self.flags & (1 << 3)) != 0
    }

    pub fn rst(&self) -> bool {
        (self.flags & (1 << 2)) != 0
    }

    pub fn syn(&self) -> bool {
        (self.flags & (1 << 1)) != 0
    }

    pub fn fin(&self) -> bool {
        (self.flags & (1 << 0)) != 0
    }

    pub fn iter_flags(&self) -> TcpFlags {
        TcpFlags(BitIter::from(self.flags))
    }
}

impl fmt::Display for TcpHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let flags: Vec<&'static str> = self.iter_flags().map(|flag: TcpFlag| flag.name()).collect();
        write!(
            f,
            "tcp {} -> {} seq={} ack={} flags=[{}] win={}",
            self.src_port,
            self.dst_port,
            self.seq_num,
            self.ack_num,
            flags.join(","),
            self.window_size
        )
    }
}
