//! Frame encoder.
//!
//! Builds complete frames in a stack buffer (no heap) and hands each one to
//! the platform in a single `write_bytes` call. Outgoing frames use the
//! same wire format as incoming ones.

use crate::config::{MAX_FRAME_SIZE, MAX_PAYLOAD, PROTOCOL_VERSION, START_BYTE};
use crate::crc16;
use crate::platform::Platform;
use crate::protocol::evt;

/// Outgoing-frame builder plus the device-originated event counter.
///
/// Responses echo the seq id of the request that triggered them.
/// Spontaneous events draw from `event_seq`, which starts at 0 on boot and
/// wraps at 256.
#[derive(Debug, Default)]
pub struct Encoder {
    event_seq: u8,
}

impl Encoder {
    pub const fn new() -> Self {
        Self { event_seq: 0 }
    }

    /// Build and transmit one frame.
    ///
    /// Oversized payloads are silently clamped to [`MAX_PAYLOAD`]. Exactly
    /// one `write_bytes` call per frame; the platform is assumed atomic at
    /// that granularity.
    pub fn send(&self, cmd: u8, seq: u8, payload: &[u8], plat: &dyn Platform) {
        let payload = &payload[..payload.len().min(MAX_PAYLOAD)];

        let mut frame = [0u8; MAX_FRAME_SIZE];
        frame[0] = START_BYTE;
        frame[1] = PROTOCOL_VERSION;
        frame[2] = cmd;
        frame[3] = seq;
        frame[4] = payload.len() as u8;
        frame[5..5 + payload.len()].copy_from_slice(payload);
        let mut len = 5 + payload.len();

        // CRC over VERSION..PAYLOAD; the start byte stays outside.
        let crc = crc16::compute(&frame[1..len]);
        let [hi, lo] = crc.to_be_bytes();
        frame[len] = hi;
        frame[len + 1] = lo;
        len += 2;

        plat.write_bytes(&frame[..len]);
    }

    // -----------------------------
    // Responses (echo the request seq)
    // -----------------------------

    /// ACK with an optional payload.
    pub fn send_ack(&self, seq: u8, payload: &[u8], plat: &dyn Platform) {
        self.send(evt::ACK, seq, payload, plat);
    }

    /// NACK, always empty.
    pub fn send_nack(&self, seq: u8, plat: &dyn Platform) {
        self.send(evt::NACK, seq, &[], plat);
    }

    // -----------------------------
    // Spontaneous events (consume event_seq)
    // -----------------------------

    pub fn send_button_pressed(&mut self, widget_idx: u8, plat: &dyn Platform) {
        let seq = self.next_event_seq();
        self.send(evt::BUTTON_PRESSED, seq, &[widget_idx], plat);
    }

    pub fn send_slider_changed(&mut self, widget_idx: u8, value: i16, plat: &dyn Platform) {
        let [hi, lo] = value.to_be_bytes();
        let seq = self.next_event_seq();
        self.send(evt::SLIDER_CHANGED, seq, &[widget_idx, hi, lo], plat);
    }

    pub fn send_page_changed(&mut self, page_id: u8, plat: &dyn Platform) {
        let seq = self.next_event_seq();
        self.send(evt::PAGE_CHANGED, seq, &[page_id], plat);
    }

    pub fn send_touch_event(&mut self, x: i16, y: i16, plat: &dyn Platform) {
        let [xh, xl] = x.to_be_bytes();
        let [yh, yl] = y.to_be_bytes();
        let seq = self.next_event_seq();
        self.send(evt::TOUCH_EVENT, seq, &[xh, xl, yh, yl], plat);
    }

    fn next_event_seq(&mut self) -> u8 {
        let seq = self.event_seq;
        self.event_seq = self.event_seq.wrapping_add(1);
        seq
    }
}

/// Encoder bound to its platform.
///
/// This is what command handlers and UI event sources get to talk through;
/// responses and spontaneous events share the one transmit seam.
pub struct FrameSender<'a> {
    encoder: &'a mut Encoder,
    platform: &'a dyn Platform,
}

impl<'a> FrameSender<'a> {
    pub fn new(encoder: &'a mut Encoder, platform: &'a dyn Platform) -> Self {
        Self { encoder, platform }
    }

    pub fn ack(&mut self, seq: u8, payload: &[u8]) {
        self.encoder.send_ack(seq, payload, self.platform);
    }

    pub fn nack(&mut self, seq: u8) {
        self.encoder.send_nack(seq, self.platform);
    }

    pub fn button_pressed(&mut self, widget_idx: u8) {
        self.encoder.send_button_pressed(widget_idx, self.platform);
    }

    pub fn slider_changed(&mut self, widget_idx: u8, value: i16) {
        self.encoder.send_slider_changed(widget_idx, value, self.platform);
    }

    pub fn page_changed(&mut self, page_id: u8) {
        self.encoder.send_page_changed(page_id, self.platform);
    }

    pub fn touch(&mut self, x: i16, y: i16) {
        self.encoder.send_touch_event(x, y, self.platform);
    }

    /// The platform behind this sender, for handlers that need the clock or
    /// the log sink.
    pub fn platform(&self) -> &dyn Platform {
        self.platform
    }
}
