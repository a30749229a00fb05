// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

#![cfg_attr(feature = "strict", deny(warnings))]
#![deny(clippy::all)]

#[macro_use]
extern crate log;

pub mod config;
pub mod decoder;
pub mod protocols;
pub mod runtime;

pub use self::{
    decoder::{
        decode,
        DecodedFrame,
    },
    protocols::{
        layer2::{
            Ethernet2Header,
            EtherType2,
            LinkLayerAddresses,
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
    runtime::{
        fail::Fail,
        network::types::MacAddress,
    },
};

/// Bails out of the enclosing function with an [anyhow::Error] if both expressions are not equal.
#[macro_export]
macro_rules! ensure_eq {
    ($left:expr, $right:expr) => ({
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    ::anyhow::bail!(
                        "ensure failed: `(left == right)` left: `{:?}`, right: `{:?}` at {}:{}",
                        left_val,
                        right_val,
                        file!(),
                        line!()
                    );
                }
            }
        }
    });
}

/// Bails out of the enclosing function with an [anyhow::Error] if both expressions are equal.
#[macro_export]
macro_rules! ensure_neq {
    ($left:expr, $right:expr) => ({
        match (&$left, &$right) {
            (left_val, right_val) => {
                if *left_val == *right_val {
                    ::anyhow::bail!(
                        "ensure failed: `(left != right)` left: `{:?}`, right: `{:?}` at {}:{}",
                        left_val,
                        right_val,
                        file!(),
                        line!()
                    );
                }
            }
        }
    });
}
