//! Shared test doubles: a recording platform and frame helpers.

use std::cell::{Cell, RefCell};
use std::string::String;
use std::vec::Vec;

use crate::parser::{Frame, Parser};
use crate::platform::Platform;

/// Platform stub that records everything written through it.
#[derive(Default)]
pub struct TestPlatform {
    pub tx: RefCell<Vec<u8>>,
    pub logs: RefCell<Vec<String>>,
    /// Number of `write_bytes` calls.
    pub writes: Cell<usize>,
    pub now: Cell<u32>,
}

impl TestPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tx_bytes(&self) -> Vec<u8> {
        self.tx.borrow().clone()
    }
}

impl Platform for TestPlatform {
    fn write_bytes(&self, data: &[u8]) {
        self.writes.set(self.writes.get() + 1);
        self.tx.borrow_mut().extend_from_slice(data);
    }

    fn millis(&self) -> u32 {
        self.now.get()
    }

    fn log(&self, msg: &str) {
        self.logs.borrow_mut().push(msg.into());
    }
}

/// Serialize a frame the way a host would put it on the wire.
pub fn encode(command: u8, seq_id: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = vec![
        crate::config::START_BYTE,
        crate::config::PROTOCOL_VERSION,
        command,
        seq_id,
        payload.len() as u8,
    ];
    out.extend_from_slice(payload);
    out.extend_from_slice(&crate::crc16::compute(&out[1..]).to_be_bytes());
    out
}

/// Build a [`Frame`] value directly, bypassing the wire.
pub fn frame(command: u8, seq_id: u8, payload: &[u8]) -> Frame {
    Frame {
        version: crate::config::PROTOCOL_VERSION,
        command,
        seq_id,
        payload: heapless::Vec::from_slice(payload).unwrap(),
    }
}

/// Decode a transmitted byte stream back into frames. Panics in spirit (via
/// assert) if any byte fails to validate, since tests only ever decode
/// streams the encoder produced.
pub fn decode_frames(bytes: &[u8]) -> Vec<Frame> {
    let silent = TestPlatform::new();
    let mut parser = Parser::new();
    let frames: Vec<Frame> = bytes.iter().filter_map(|&b| parser.feed(b, &silent)).collect();
    assert_eq!(parser.stats().frames_crc_err, 0, "corrupt TX stream");
    assert_eq!(parser.stats().frames_len_err, 0, "corrupt TX stream");
    frames
}
