//! Debounced edge capture - interrupt context.
//!
//! The pin-change interrupt is shared by both buttons. For each button
//! whose condition is asserted we acknowledge it and, if more than
//! [`DEBOUNCE_TIME_MS`] has passed since the last accepted edge, publish
//! the edge. Anything closer is contact bounce and is dropped. O(1), no
//! blocking.

use super::{ButtonId, ButtonState};
use crate::clock::elapsed;
use crate::config::DEBOUNCE_TIME_MS;
use crate::hal::PinInterrupts;

/// Debounce one raw edge at `now`. Returns whether it was accepted.
pub fn on_edge(state: &ButtonState, now: u32) -> bool {
    if elapsed(now, state.last_recorded_time()) > DEBOUNCE_TIME_MS {
        state.record(now);
        trace!("edge accepted @{}", now);
        true
    } else {
        trace!("edge bounced @{}", now);
        false
    }
}

/// Pin-change interrupt handler for both buttons.
///
/// Each asserted button is cleared before its edge is evaluated; buttons
/// whose condition is not asserted are left alone.
pub fn on_pin_interrupt<P: PinInterrupts>(
    buttons: &[ButtonState; 2],
    pins: &mut P,
    now: u32,
) {
    for id in ButtonId::ALL {
        if pins.is_pending(id) {
            pins.clear(id);
            on_edge(&buttons[id.index()], now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Pins {
        pending: [bool; 2],
        cleared: [u32; 2],
    }

    impl PinInterrupts for Pins {
        fn is_pending(&self, button: ButtonId) -> bool {
            self.pending[button.index()]
        }

        fn clear(&mut self, button: ButtonId) {
            self.pending[button.index()] = false;
            self.cleared[button.index()] += 1;
        }
    }

    #[test]
    fn edges_within_debounce_window_collapse() {
        let state = ButtonState::new();
        assert!(on_edge(&state, 1000));
        assert!(!on_edge(&state, 1020));
        assert!(!on_edge(&state, 1050)); // exactly the window: still bounce
        assert_eq!(state.take_press(), Some(1000));
        assert_eq!(state.take_press(), None);
    }

    #[test]
    fn edges_beyond_debounce_window_are_each_accepted() {
        let state = ButtonState::new();
        assert!(on_edge(&state, 1000));
        assert_eq!(state.take_press(), Some(1000));
        assert!(on_edge(&state, 1051));
        assert_eq!(state.take_press(), Some(1051));
    }

    #[test]
    fn bounce_does_not_extend_the_gate() {
        // The gate measures from the last *accepted* edge.
        let state = ButtonState::new();
        assert!(on_edge(&state, 1000));
        assert!(!on_edge(&state, 1040));
        assert!(on_edge(&state, 1060));
        assert_eq!(state.last_recorded_time(), 1060);
    }

    #[test]
    fn edges_in_first_debounce_window_after_boot_are_dropped() {
        let state = ButtonState::new();
        assert!(!on_edge(&state, 0));
        assert!(!on_edge(&state, 50));
        assert!(on_edge(&state, 51));
    }

    #[test]
    fn debounce_survives_counter_wrap() {
        let state = ButtonState::new();
        assert!(on_edge(&state, u32::MAX - 10));
        state.take_press();
        assert!(!on_edge(&state, 20)); // 31 ms later
        assert!(on_edge(&state, 60)); // 71 ms later
    }

    #[test]
    fn pin_interrupt_services_only_asserted_buttons() {
        let buttons = [ButtonState::new(), ButtonState::new()];
        let mut pins = Pins::default();
        pins.pending[ButtonId::B.index()] = true;

        on_pin_interrupt(&buttons, &mut pins, 500);

        assert_eq!(pins.cleared, [0, 1]);
        assert!(!buttons[0].is_pressed());
        assert_eq!(buttons[1].take_press(), Some(500));
    }

    #[test]
    fn pin_interrupt_clears_even_when_edge_bounces() {
        let buttons = [ButtonState::new(), ButtonState::new()];
        let mut pins = Pins::default();

        pins.pending = [true, true];
        on_pin_interrupt(&buttons, &mut pins, 200);
        pins.pending = [true, false];
        on_pin_interrupt(&buttons, &mut pins, 230);

        assert_eq!(pins.cleared, [2, 1]);
        assert_eq!(buttons[0].take_press(), Some(200));
        assert_eq!(buttons[0].take_press(), None);
        assert_eq!(buttons[1].take_press(), Some(200));
    }
}
