//! Unified error type for serial-remote.
//!
//! We avoid `alloc` - all error variants carry no data, so the enum
//! stays `Copy`. Implements `defmt::Format` for on-target logging.

/// Top-level error type used across the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The UART rejected or aborted a transmission.
    Serial,

    /// A formatted line did not fit the line buffer.
    LineOverflow,

    /// The analog converter did not signal completion within the
    /// configured number of polls (only with a bounded wait).
    ConversionTimeout,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Serial => f.write_str("serial transmit failed"),
            Error::LineOverflow => f.write_str("line buffer overflow"),
            Error::ConversionTimeout => f.write_str("analog conversion timed out"),
        }
    }
}
