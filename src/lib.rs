#![cfg_attr(not(test), no_std)]

//! Display Manager core.
//!
//! Firmware side of a host-driven touchscreen UI: the device exposes its UI
//! over a serial byte pipe and accepts commands that manipulate it. The
//! host initiates, the device responds; the transport preserves order but
//! not integrity, so everything rides in CRC-validated frames.
//!
//! Framing (big-endian multi-byte fields):
//!
//!   [ 0xAA, VERSION, CMD, SEQ, LEN, <PAYLOAD...>, CRCH, CRCL ]
//!
//! The crate is hardware-free. A board port supplies a [`Platform`] (TX
//! bytes, millisecond clock, log sink), builds a [`DisplayManager`] around
//! it, and feeds received bytes in from the main context:
//!
//! - [`parser`] turns the noisy byte stream into validated frames,
//! - [`protocol`] routes each frame to a [`CommandHandlers`] slot,
//! - [`binder`] overrides the UI slots and drives a [`UiBackend`],
//! - [`packet`] builds ACK/NACK responses and spontaneous events.
//!
//! Inbound frames are answered before `receive_byte` returns; spontaneous
//! UI events go out through [`DisplayManager::sender`].

pub mod binder;
pub mod config;
pub mod crc16;
pub mod manager;
pub mod packet;
pub mod parser;
pub mod platform;
pub mod protocol;

#[cfg(test)]
mod testutil;

pub use binder::{Binder, UiBackend};
pub use manager::DisplayManager;
pub use packet::{Encoder, FrameSender};
pub use parser::{Frame, Parser, Stats};
pub use platform::Platform;
pub use protocol::{cmd, evt, CommandHandlers, DefaultHandlers};
