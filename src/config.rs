//! Build-time configuration knobs.
//!
//! These are the values a board port is expected to tune. Everything else
//! in the crate derives its buffer sizes from them.

/// Maximum payload bytes in a single frame (excludes header + CRC).
pub const MAX_PAYLOAD: usize = 128;

/// Protocol version stamped into every outgoing frame and reported by
/// GET_VERSION.
pub const PROTOCOL_VERSION: u8 = 0x01;

/// Start-of-frame marker. Not covered by the CRC.
pub const START_BYTE: u8 = 0xAA;

/// START(1) + VERSION(1) + CMD(1) + SEQ(1) + LEN(1).
pub const HEADER_SIZE: usize = 5;

/// CRC16 trailer size.
pub const CRC_SIZE: usize = 2;

/// Largest frame that can appear on the wire.
pub const MAX_FRAME_SIZE: usize = HEADER_SIZE + MAX_PAYLOAD + CRC_SIZE;

/// Byte cap for a SET_TEXT string, terminator included. Hosts built against
/// the C implementation send C strings sized to this.
pub const MAX_TEXT_LEN: usize = 64;

/// Number of pages a UI backend is expected to manage.
pub const MAX_PAGES: usize = 8;
