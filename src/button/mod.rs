//! Physical buttons - edge capture and click classification.
//!
//! Two buttons, each with its own shared [`ButtonState`] record:
//!
//! - **Edge detection** ([`edge`]) runs in interrupt context. It debounces
//!   raw edges and publishes the accepted timestamp.
//! - **Click classification** ([`classifier`]) runs in the main loop. It
//!   consumes the published edge and turns edge timing into commands.
//!
//! | Button | Double-click | Single click (timeout) |
//! |--------|--------------|------------------------|
//! | A      | `previous`   | `stop`                 |
//! | B      | `next`       | `play_pause`           |

pub mod classifier;
pub mod edge;

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::emitter::Command;

pub use classifier::{ClickClassifier, ClickState};

/// Which of the two buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    A,
    B,
}

impl ButtonId {
    /// Interrupt service order.
    pub const ALL: [ButtonId; 2] = [ButtonId::A, ButtonId::B];

    pub const fn index(self) -> usize {
        match self {
            ButtonId::A => 0,
            ButtonId::B => 1,
        }
    }

    pub const fn double_click_command(self) -> Command {
        match self {
            ButtonId::A => Command::Previous,
            ButtonId::B => Command::Next,
        }
    }

    pub const fn timeout_command(self) -> Command {
        match self {
            ButtonId::A => Command::Stop,
            ButtonId::B => Command::PlayPause,
        }
    }
}

/// Per-button record shared between the edge interrupt and the main loop.
///
/// The interrupt is the only writer of every field here; the main loop
/// only reads `press_time` and clears `pressed`.
pub struct ButtonState {
    /// Timestamp of the last accepted edge (debounce gate).
    last_recorded_time: AtomicU32,
    /// Timestamp of the most recent accepted edge, valid while `pressed`.
    press_time: AtomicU32,
    /// Set once per accepted edge, cleared once by the consumer.
    pressed: AtomicBool,
}

impl ButtonState {
    pub const fn new() -> Self {
        Self {
            last_recorded_time: AtomicU32::new(0),
            press_time: AtomicU32::new(0),
            pressed: AtomicBool::new(false),
        }
    }

    /// Publish an accepted edge at `now`.
    fn record(&self, now: u32) {
        self.last_recorded_time.store(now, Ordering::Relaxed);
        self.press_time.store(now, Ordering::Relaxed);
        // Release orders the timestamps before the flag.
        self.pressed.store(true, Ordering::Release);
    }

    pub(crate) fn last_recorded_time(&self) -> u32 {
        self.last_recorded_time.load(Ordering::Relaxed)
    }

    /// Whether an accepted edge is waiting to be consumed.
    pub(crate) fn is_pressed(&self) -> bool {
        self.pressed.load(Ordering::Acquire)
    }

    /// Consume the pending edge, if any, returning its timestamp.
    ///
    /// Each accepted edge is handed out at most once. An edge landing
    /// between the read and the clear is coalesced into the one returned.
    pub fn take_press(&self) -> Option<u32> {
        if !self.pressed.load(Ordering::Acquire) {
            return None;
        }
        let t = self.press_time.load(Ordering::Relaxed);
        self.pressed.store(false, Ordering::Release);
        Some(t)
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_mapping_is_fixed() {
        assert_eq!(ButtonId::A.double_click_command(), Command::Previous);
        assert_eq!(ButtonId::A.timeout_command(), Command::Stop);
        assert_eq!(ButtonId::B.double_click_command(), Command::Next);
        assert_eq!(ButtonId::B.timeout_command(), Command::PlayPause);
    }

    #[test]
    fn take_press_hands_out_each_edge_once() {
        let state = ButtonState::new();
        assert_eq!(state.take_press(), None);

        state.record(1234);
        assert!(state.is_pressed());
        assert_eq!(state.take_press(), Some(1234));
        assert!(!state.is_pressed());
        assert_eq!(state.take_press(), None);
    }

    #[test]
    fn newer_edge_overwrites_unconsumed_one() {
        let state = ButtonState::new();
        state.record(100);
        state.record(200);
        assert_eq!(state.take_press(), Some(200));
        assert_eq!(state.take_press(), None);
    }
}
