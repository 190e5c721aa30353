//! Peripheral contracts the core calls into.
//!
//! Clock bring-up, pin muxing and the converter / UART drivers are board
//! concerns. The core only needs the handful of operations below; the
//! nRF52840 implementations live in the binary's `board` module and the
//! tests supply simulated ones.

use crate::button::ButtonId;
use crate::error::Error;

/// A latched interrupt condition that the handler must acknowledge.
pub trait InterruptFlag {
    /// Acknowledge the interrupt so it does not fire again.
    fn clear(&mut self);
}

/// Pin-change interrupt controller shared by both buttons.
pub trait PinInterrupts {
    /// Whether the edge interrupt for `button` is asserted.
    fn is_pending(&self, button: ButtonId) -> bool;

    /// Acknowledge the edge interrupt for `button`.
    fn clear(&mut self, button: ButtonId);
}

/// Single-shot analog converter.
pub trait AnalogConverter {
    /// Kick off one conversion on `channel`.
    fn start_conversion(&mut self, channel: u8);

    /// Whether the conversion started last has finished.
    fn is_complete(&mut self) -> bool;

    /// Result of the finished conversion, in millivolts.
    fn read_result_mv(&mut self) -> u32;
}

/// Blocking serial transmitter.
pub trait SerialTx {
    /// Send `line` in full, blocking until the last byte is out.
    fn transmit(&mut self, line: &str) -> Result<(), Error>;
}
