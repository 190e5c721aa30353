//! Click classification - main-loop context.
//!
//! Per-button two-state machine over accepted edge timestamps:
//!
//! ```text
//!            edge t                     edge t, t - since < window
//!   Idle ─────────────▶ Pending{t} ─────────────────────────────────▶ Idle  (double-click)
//!                        │    ▲
//!                        │    └── edge t, t - since >= window (restart)
//!                        └──── now - since > window ─────────────▶ Idle  (timeout)
//! ```
//!
//! Both comparisons are strict. A gap of exactly [`DOUBLE_CLICK_TIME_MS`]
//! is neither a double-click nor (yet) a timeout; the timeout fires on a
//! later poll once the clock has moved past the window.

use super::{ButtonId, ButtonState};
use crate::clock::elapsed;
use crate::config::DOUBLE_CLICK_TIME_MS;
use crate::emitter::Command;

/// Classifier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClickState {
    /// No click awaiting a companion.
    Idle,
    /// One accepted edge at `since`, waiting for a second edge or expiry.
    Pending { since: u32 },
}

/// Turns one button's accepted edges into `Command`s.
pub struct ClickClassifier {
    button: ButtonId,
    state: ClickState,
}

impl ClickClassifier {
    pub const fn new(button: ButtonId) -> Self {
        Self {
            button,
            state: ClickState::Idle,
        }
    }

    pub fn button(&self) -> ButtonId {
        self.button
    }

    pub fn state(&self) -> ClickState {
        self.state
    }

    /// Timestamp of the click awaiting a companion, if any.
    pub fn pending_click_time(&self) -> Option<u32> {
        match self.state {
            ClickState::Idle => None,
            ClickState::Pending { since } => Some(since),
        }
    }

    /// One main-loop iteration: consume the button's edge (if published),
    /// then check for expiry against `now`.
    ///
    /// At most one command comes out per call.
    pub fn poll(&mut self, shared: &ButtonState, now: u32) -> Option<Command> {
        self.advance(shared.take_press(), now)
    }

    /// Same as [`poll`](Self::poll) for an edge the caller already took.
    ///
    /// `press` must have been taken before `now` was read, so `now >= t`.
    pub fn advance(&mut self, press: Option<u32>, now: u32) -> Option<Command> {
        let clicked = press.and_then(|t| self.on_press(t));
        let timed_out = self.check_timeout(now);
        clicked.or(timed_out)
    }

    /// Feed one accepted edge at time `t`.
    pub fn on_press(&mut self, t: u32) -> Option<Command> {
        match self.state {
            ClickState::Pending { since } if elapsed(t, since) < DOUBLE_CLICK_TIME_MS => {
                self.state = ClickState::Idle;
                let cmd = self.button.double_click_command();
                debug!("{}: double-click -> {}", self.button, cmd);
                Some(cmd)
            }
            _ => {
                self.state = ClickState::Pending { since: t };
                None
            }
        }
    }

    /// Expire a pending click once strictly more than the window has passed.
    pub fn check_timeout(&mut self, now: u32) -> Option<Command> {
        match self.state {
            ClickState::Pending { since } if elapsed(now, since) > DOUBLE_CLICK_TIME_MS => {
                self.state = ClickState::Idle;
                let cmd = self.button.timeout_command();
                debug!("{}: single click -> {}", self.button, cmd);
                Some(cmd)
            }
            _ => None,
        }
    }
}
