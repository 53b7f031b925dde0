//! Hardware abstraction seam.
//!
//! The core never touches hardware. The board port supplies one [`Platform`]
//! value at init and every outward effect (TX bytes, clock reads,
//! diagnostics) goes through it.

/// Board-supplied capability set.
///
/// The core holds a single shared reference to the platform for its whole
/// lifetime and only ever reads through it. Implementations must not
/// re-enter the core from any of these methods.
pub trait Platform {
    /// Transmit bytes to the host (UART / USB). Synchronous and
    /// best-effort: failures stay inside the platform, the host retries on
    /// its own timeout.
    fn write_bytes(&self, data: &[u8]);

    /// Free-running monotonic millisecond counter. May wrap.
    fn millis(&self) -> u32;

    /// Diagnostic string sink. Fire-and-forget; may be a no-op.
    fn log(&self, msg: &str);
}
