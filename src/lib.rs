//! Core logic of the serial media remote.
//!
//! Two buttons and one analog input become a stream of ASCII lines on a
//! UART (`previous`, `next`, `stop`, `play_pause`, or a 0-100 level).
//! Everything here is hardware-independent and `no_std`: peripherals are
//! reached only through the traits in [`hal`], so the whole pipeline runs
//! on the host under `cargo test --lib`.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and supplies the nRF52840 implementations of the `hal` traits.

#![cfg_attr(not(test), no_std)]

// Must come first: the logging macros are textually scoped.
#[macro_use]
mod fmt;

// ═══════════════════════════════════════════════════════════════════════════
// Configuration & errors
// ═══════════════════════════════════════════════════════════════════════════

pub mod config;
pub mod error;
pub mod hal;

// ═══════════════════════════════════════════════════════════════════════════
// Event pipeline
// ═══════════════════════════════════════════════════════════════════════════

pub mod analog;
pub mod button;
pub mod clock;
pub mod emitter;
pub mod remote;

pub use button::ButtonId;
pub use emitter::{Command, Event};
pub use error::Error;
pub use remote::{Remote, SharedState};
