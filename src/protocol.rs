//! Command/event IDs and the dispatcher.
//!
//! Commands travel host → device, events device → host. Every validated
//! frame is routed to exactly one [`CommandHandlers`] method; unknown
//! commands get a NACK so a misbehaving host hears something definite
//! instead of waiting out a timeout.

use crate::config::PROTOCOL_VERSION;
use crate::packet::FrameSender;
use crate::parser::Frame;

/// Host → device command IDs.
pub mod cmd {
    // System
    pub const PING: u8 = 0x01;
    pub const GET_VERSION: u8 = 0x02;
    pub const RESET: u8 = 0x03;
    pub const ENTER_BOOTLOADER: u8 = 0x04;

    // Navigation
    pub const SHOW_PAGE: u8 = 0x10;

    // UI manipulation
    pub const SET_TEXT: u8 = 0x20;
    pub const SET_VALUE: u8 = 0x21;
    pub const SET_VISIBLE: u8 = 0x22;
    pub const SET_ENABLED: u8 = 0x23;
}

/// Device → host event IDs.
pub mod evt {
    pub const BUTTON_PRESSED: u8 = 0x80;
    pub const SLIDER_CHANGED: u8 = 0x81;
    pub const PAGE_CHANGED: u8 = 0x82;
    pub const TOUCH_EVENT: u8 = 0x83;

    pub const ACK: u8 = 0xF0;
    pub const NACK: u8 = 0xF1;
}

/// Per-command handler slots, with the stock behaviour as default bodies.
///
/// The application binder overrides the methods it cares about and inherits
/// the rest, so the core never has to know about application code. Handlers
/// receive the raw payload and reply through the sender.
pub trait CommandHandlers {
    fn ping(&mut self, seq: u8, _payload: &[u8], tx: &mut FrameSender<'_>) {
        tx.ack(seq, &[]);
    }

    fn get_version(&mut self, seq: u8, _payload: &[u8], tx: &mut FrameSender<'_>) {
        // major.minor.patch triplet
        tx.ack(seq, &[PROTOCOL_VERSION, 0x00, 0x00]);
    }

    fn reset(&mut self, seq: u8, _payload: &[u8], tx: &mut FrameSender<'_>) {
        // The board port should override this and actually pull the reset
        // line after the ACK has left.
        tx.ack(seq, &[]);
    }

    fn enter_bootloader(&mut self, seq: u8, _payload: &[u8], tx: &mut FrameSender<'_>) {
        // Not supported unless the board port says otherwise.
        tx.nack(seq);
    }

    fn show_page(&mut self, seq: u8, _payload: &[u8], tx: &mut FrameSender<'_>) {
        // UI commands need a binder.
        tx.nack(seq);
    }

    fn set_text(&mut self, seq: u8, _payload: &[u8], tx: &mut FrameSender<'_>) {
        tx.nack(seq);
    }

    fn set_value(&mut self, seq: u8, _payload: &[u8], tx: &mut FrameSender<'_>) {
        tx.nack(seq);
    }

    fn set_visible(&mut self, seq: u8, _payload: &[u8], tx: &mut FrameSender<'_>) {
        tx.nack(seq);
    }

    fn set_enabled(&mut self, seq: u8, _payload: &[u8], tx: &mut FrameSender<'_>) {
        tx.nack(seq);
    }
}

/// Handler set with every default left in place.
pub struct DefaultHandlers;

impl CommandHandlers for DefaultHandlers {}

/// Route one validated frame to its handler.
///
/// Unknown commands are NACKed and logged; they are not a parser error.
pub fn dispatch<H>(frame: &Frame, handlers: &mut H, tx: &mut FrameSender<'_>)
where
    H: CommandHandlers + ?Sized,
{
    let payload = frame.payload.as_slice();
    match frame.command {
        cmd::PING => handlers.ping(frame.seq_id, payload, tx),
        cmd::GET_VERSION => handlers.get_version(frame.seq_id, payload, tx),
        cmd::RESET => handlers.reset(frame.seq_id, payload, tx),
        cmd::ENTER_BOOTLOADER => handlers.enter_bootloader(frame.seq_id, payload, tx),
        cmd::SHOW_PAGE => handlers.show_page(frame.seq_id, payload, tx),
        cmd::SET_TEXT => handlers.set_text(frame.seq_id, payload, tx),
        cmd::SET_VALUE => handlers.set_value(frame.seq_id, payload, tx),
        cmd::SET_VISIBLE => handlers.set_visible(frame.seq_id, payload, tx),
        cmd::SET_ENABLED => handlers.set_enabled(frame.seq_id, payload, tx),
        _ => {
            tx.platform().log("dm: unknown command, sending NACK");
            tx.nack(frame.seq_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::Encoder;
    use crate::testutil::{decode_frames, frame, TestPlatform};

    #[test]
    fn default_ping_acks_empty() {
        let plat = TestPlatform::new();
        let mut enc = Encoder::new();
        let mut tx = FrameSender::new(&mut enc, &plat);

        dispatch(&frame(cmd::PING, 0x7B, &[]), &mut DefaultHandlers, &mut tx);
        let out = decode_frames(&plat.tx_bytes());
        assert_eq!(out.len(), 1);
        assert_eq!((out[0].command, out[0].seq_id), (evt::ACK, 0x7B));
        assert!(out[0].payload.is_empty());
    }

    #[test]
    fn default_get_version_reports_triplet() {
        let plat = TestPlatform::new();
        let mut enc = Encoder::new();
        let mut tx = FrameSender::new(&mut enc, &plat);

        dispatch(&frame(cmd::GET_VERSION, 0x10, &[]), &mut DefaultHandlers, &mut tx);
        let out = decode_frames(&plat.tx_bytes());
        assert_eq!(out[0].command, evt::ACK);
        assert_eq!(out[0].payload.as_slice(), &[PROTOCOL_VERSION, 0x00, 0x00]);
    }

    #[test]
    fn default_reset_acks() {
        let plat = TestPlatform::new();
        let mut enc = Encoder::new();
        let mut tx = FrameSender::new(&mut enc, &plat);

        dispatch(&frame(cmd::RESET, 0x01, &[]), &mut DefaultHandlers, &mut tx);
        assert_eq!(decode_frames(&plat.tx_bytes())[0].command, evt::ACK);
    }

    #[test]
    fn default_bootloader_and_ui_commands_nack() {
        for command in [
            cmd::ENTER_BOOTLOADER,
            cmd::SHOW_PAGE,
            cmd::SET_TEXT,
            cmd::SET_VALUE,
            cmd::SET_VISIBLE,
            cmd::SET_ENABLED,
        ] {
            let plat = TestPlatform::new();
            let mut enc = Encoder::new();
            let mut tx = FrameSender::new(&mut enc, &plat);

            dispatch(&frame(command, 0x55, &[0, 0, 0]), &mut DefaultHandlers, &mut tx);
            let out = decode_frames(&plat.tx_bytes());
            assert_eq!(out.len(), 1, "command {command:#04x}");
            assert_eq!((out[0].command, out[0].seq_id), (evt::NACK, 0x55));
        }
    }

    #[test]
    fn unknown_command_nacks_and_logs() {
        let plat = TestPlatform::new();
        let mut enc = Encoder::new();
        let mut tx = FrameSender::new(&mut enc, &plat);

        dispatch(&frame(0xFE, 0x21, &[]), &mut DefaultHandlers, &mut tx);
        let out = decode_frames(&plat.tx_bytes());
        assert_eq!(out.len(), 1);
        assert_eq!((out[0].command, out[0].seq_id), (evt::NACK, 0x21));
        assert!(plat.logs.borrow().iter().any(|l| l.contains("unknown command")));
    }
}
