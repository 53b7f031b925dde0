//! Core context: one parser, one encoder, one handler set, one platform.
//!
//! The board firmware interacts with the protocol through this type alone:
//! construct it once, feed received bytes into [`DisplayManager::receive_byte`]
//! from the main context, call [`DisplayManager::process`] from the main
//! loop. Two independent serial links get two managers; they share nothing.

use crate::packet::{Encoder, FrameSender};
use crate::parser::{Parser, Stats};
use crate::platform::Platform;
use crate::protocol::{self, CommandHandlers};

pub struct DisplayManager<'a, H> {
    platform: &'a dyn Platform,
    parser: Parser,
    encoder: Encoder,
    handlers: H,
}

impl<'a, H: CommandHandlers> DisplayManager<'a, H> {
    /// Stores the platform reference for the life of the manager.
    pub fn new(platform: &'a dyn Platform, handlers: H) -> Self {
        platform.log("dm: initialised");
        Self {
            platform,
            parser: Parser::new(),
            encoder: Encoder::new(),
            handlers,
        }
    }

    /// Feed one received byte.
    ///
    /// When the byte completes a valid frame, the command is dispatched
    /// before this returns, so responses leave the device in the order the
    /// frames' CRCs arrived. Call only from the main context; a byte-input
    /// ISR must marshal bytes over first.
    pub fn receive_byte(&mut self, byte: u8) {
        if let Some(frame) = self.parser.feed(byte, self.platform) {
            let mut tx = FrameSender::new(&mut self.encoder, self.platform);
            protocol::dispatch(&frame, &mut self.handlers, &mut tx);
        }
    }

    /// Feed a chunk of received bytes.
    pub fn receive(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.receive_byte(byte);
        }
    }

    /// Periodic tick from the main loop. Must not block.
    pub fn process(&mut self) {
        // Reserved for timeout-driven work; mid-frame idleness is tolerated
        // indefinitely, so there is nothing to expire yet.
    }

    /// Receive statistics (read-only).
    pub fn stats(&self) -> &Stats {
        self.parser.stats()
    }

    /// Sender for device-originated events. UI callbacks (button pressed,
    /// slider moved, touch) report through this.
    pub fn sender(&mut self) -> FrameSender<'_> {
        FrameSender::new(&mut self.encoder, self.platform)
    }

    pub fn handlers(&self) -> &H {
        &self.handlers
    }

    pub fn handlers_mut(&mut self) -> &mut H {
        &mut self.handlers
    }
}
