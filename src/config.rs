//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, pin assignments, and wire-format constants
//! live here so they can be tuned in one place.

// Timing

/// Period of the tick source (ms). One tick = one clock increment.
pub const TICK_PERIOD_MS: u64 = 1;

/// Minimum gap between two accepted edges on the same button (ms).
/// An edge is accepted only if strictly more than this has elapsed.
pub const DEBOUNCE_TIME_MS: u32 = 50;

/// Double-click window (ms). A second edge strictly closer than this is a
/// double-click; a pending click older than this (strictly) times out.
pub const DOUBLE_CLICK_TIME_MS: u32 = 500;

/// Minimum gap between two analog samples (ms).
pub const ADC_READ_INTERVAL_MS: u32 = 100;

// Analog input

/// Analog channel sampled by the main loop.
pub const ADC_CHANNEL: u8 = 12;

/// Divisor turning millivolts into the transmitted range.
/// 0-5000 mV maps to 0-100.
pub const ADC_SCALE_DIVISOR_MV: u32 = 50;

// Serial wire format

/// Every transmitted line ends with this.
pub const LINE_TERMINATOR: &str = "\n\r";

/// Longest line we ever build: `u32::MAX` is 10 digits, plus terminator.
pub const MAX_LINE_LEN: usize = 16;

/// UART baud rate. Must be one of the UARTE rates (checked at build time).
pub const UART_BAUD: u32 = 115_200;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button A (previous / stop)      → P0.11
//   Button B (next / play_pause)    → P0.12
//   Analog input                    → P0.03 (AIN1)
//   UART TX                         → P0.06
//   UART RX                         → P0.08
