//! Application binder.
//!
//! Bridges the protocol layer and the UI toolkit: validated UI commands are
//! parsed here and forwarded to a [`UiBackend`], and every request is
//! answered with ACK or NACK. Toolkit event callbacks go the other way,
//! through the [`crate::packet::FrameSender`] event helpers.
//!
//! Payload conventions (host → device):
//!
//!   SHOW_PAGE    [1 byte]  page_id
//!   SET_TEXT     [1 byte widget_idx] [N bytes text, NUL optional]
//!   SET_VALUE    [1 byte widget_idx] [2 bytes int16 big-endian]
//!   SET_VISIBLE  [1 byte widget_idx] [1 byte 0=hide nonzero=show]
//!   SET_ENABLED  [1 byte widget_idx] [1 byte 0=disable nonzero=enable]

use crate::config::MAX_TEXT_LEN;
use crate::packet::FrameSender;
use crate::protocol::CommandHandlers;

/// Toolkit contract the binder drives.
///
/// Widgets are addressed by the compact index the UI layer assigned at
/// registration time; indices stay stable for the session. Pages use a
/// compact page id the same way.
pub trait UiBackend {
    /// Switch to a page. `false` when `page_id` is out of range.
    fn show_page(&mut self, page_id: u8) -> bool;

    /// Set a label's text. Buttons forward to their first child label;
    /// any other widget kind is a type error and returns `false`.
    fn set_text(&mut self, widget_idx: u8, text: &str) -> bool;

    /// Set a slider's value. The toolkit clamps and animates as it sees
    /// fit. `false` on unknown index or non-slider widget.
    fn set_value(&mut self, widget_idx: u8, value: i16) -> bool;

    /// Show or hide a widget. No-op on an unknown index.
    fn set_visible(&mut self, widget_idx: u8, visible: bool);

    /// Enable or disable a widget. No-op on an unknown index.
    fn set_enabled(&mut self, widget_idx: u8, enabled: bool);
}

/// Handler set that overrides the five UI commands; everything else keeps
/// the protocol defaults.
pub struct Binder<U> {
    ui: U,
}

impl<U: UiBackend> Binder<U> {
    pub fn new(ui: U) -> Self {
        Self { ui }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }
}

impl<U: UiBackend> CommandHandlers for Binder<U> {
    fn show_page(&mut self, seq: u8, payload: &[u8], tx: &mut FrameSender<'_>) {
        let Some(&page_id) = payload.first() else {
            tx.nack(seq);
            return;
        };
        if self.ui.show_page(page_id) {
            // ACK first, then the page-change notification.
            tx.ack(seq, &[]);
            tx.page_changed(page_id);
        } else {
            tx.nack(seq);
        }
    }

    fn set_text(&mut self, seq: u8, payload: &[u8], tx: &mut FrameSender<'_>) {
        if payload.len() < 2 {
            tx.nack(seq);
            return;
        }
        let widget_idx = payload[0];
        let mut text = &payload[1..];
        // Hosts built against the C firmware send NUL-terminated strings;
        // cut at the terminator when one is embedded.
        if let Some(nul) = text.iter().position(|&b| b == 0) {
            text = &text[..nul];
        }
        if text.len() > MAX_TEXT_LEN - 1 {
            text = &text[..MAX_TEXT_LEN - 1];
        }
        let ok = match core::str::from_utf8(text) {
            Ok(text) => self.ui.set_text(widget_idx, text),
            Err(_) => false,
        };
        if ok {
            tx.ack(seq, &[]);
        } else {
            tx.nack(seq);
        }
    }

    fn set_value(&mut self, seq: u8, payload: &[u8], tx: &mut FrameSender<'_>) {
        if payload.len() < 3 {
            tx.nack(seq);
            return;
        }
        let value = i16::from_be_bytes([payload[1], payload[2]]);
        if self.ui.set_value(payload[0], value) {
            tx.ack(seq, &[]);
        } else {
            tx.nack(seq);
        }
    }

    fn set_visible(&mut self, seq: u8, payload: &[u8], tx: &mut FrameSender<'_>) {
        if payload.len() < 2 {
            tx.nack(seq);
            return;
        }
        self.ui.set_visible(payload[0], payload[1] != 0);
        tx.ack(seq, &[]);
    }

    fn set_enabled(&mut self, seq: u8, payload: &[u8], tx: &mut FrameSender<'_>) {
        if payload.len() < 2 {
            tx.nack(seq);
            return;
        }
        self.ui.set_enabled(payload[0], payload[1] != 0);
        tx.ack(seq, &[]);
    }
}
