//! The remote itself: shared interrupt state plus the main-loop step.
//!
//! [`SharedState`] is the one context object both execution contexts see.
//! Interrupt context writes the clock and the button records through
//! `on_timer_interrupt` / `on_pin_interrupt`; the main loop owns a
//! [`Remote`] and calls [`Remote::step`] forever, each call reading the
//! clock once and driving the sampler and both classifiers.
//!
//! Field ownership (no locks needed):
//!
//! | Field                               | Writer     | Reader     |
//! |-------------------------------------|------------|------------|
//! | clock                               | tick IRQ   | everyone   |
//! | pressed / press_time / last_recorded| pin IRQ    | main loop  |
//! | pressed (clear)                     | main loop  | -          |
//! | pending click, analog state         | main loop  | main loop  |

use crate::analog::AnalogSampler;
use crate::button::{edge, ButtonId, ButtonState, ClickClassifier};
use crate::clock::Clock;
use crate::emitter::{Event, EventEmitter};
use crate::hal::{AnalogConverter, InterruptFlag, PinInterrupts, SerialTx};

/// State shared between interrupt handlers and the main loop.
pub struct SharedState {
    pub clock: Clock,
    buttons: [ButtonState; 2],
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            clock: Clock::new(),
            buttons: [ButtonState::new(), ButtonState::new()],
        }
    }

    pub fn button(&self, id: ButtonId) -> &ButtonState {
        &self.buttons[id.index()]
    }

    /// Timer interrupt: acknowledge and tick.
    pub fn on_timer_interrupt<F: InterruptFlag>(&self, flag: &mut F) {
        self.clock.on_timer_interrupt(flag);
    }

    /// Pin-change interrupt for both buttons.
    pub fn on_pin_interrupt<P: PinInterrupts>(&self, pins: &mut P) {
        edge::on_pin_interrupt(&self.buttons, pins, self.clock.now());
    }

    /// Edge on `id` that the GPIO driver already acknowledged.
    pub fn on_button_edge(&self, id: ButtonId) -> bool {
        edge::on_edge(&self.buttons[id.index()], self.clock.now())
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main-loop side: sampler, classifiers and the serial emitter.
pub struct Remote<A, S> {
    adc: A,
    emitter: EventEmitter<S>,
    sampler: AnalogSampler,
    classifiers: [ClickClassifier; 2],
}

impl<A: AnalogConverter, S: SerialTx> Remote<A, S> {
    pub fn new(adc: A, serial: S) -> Self {
        Self::with_sampler(adc, serial, AnalogSampler::new())
    }

    /// Use a custom sampler (e.g. one with a bounded conversion wait).
    pub fn with_sampler(adc: A, serial: S, sampler: AnalogSampler) -> Self {
        Self {
            adc,
            emitter: EventEmitter::new(serial),
            sampler,
            classifiers: [
                ClickClassifier::new(ButtonId::A),
                ClickClassifier::new(ButtonId::B),
            ],
        }
    }

    /// One iteration of the cooperative main loop.
    ///
    /// Published edges are taken first and the clock is read once after
    /// that, so every edge handled here is no newer than `now`. Edges that
    /// arrive while the conversion or a transmit blocks wait for the next
    /// iteration. Analog first, then button A, then button B. Failures
    /// are logged and dropped, never retried.
    pub fn step(&mut self, shared: &SharedState) {
        let presses = ButtonId::ALL.map(|id| shared.button(id).take_press());
        let now = shared.clock.now();
        let Self {
            adc,
            emitter,
            sampler,
            classifiers,
        } = self;

        match sampler.poll(adc, now) {
            Ok(Some(level)) => transmit(emitter, Event::Level(level)),
            Ok(None) => {}
            Err(_e) => warn!("adc: {}", _e),
        }

        for classifier in classifiers.iter_mut() {
            let press = presses[classifier.button().index()];
            if let Some(cmd) = classifier.advance(press, now) {
                transmit(emitter, cmd.into());
            }
        }
    }

    pub fn classifier(&self, id: ButtonId) -> &ClickClassifier {
        &self.classifiers[id.index()]
    }

    pub fn sampler(&self) -> &AnalogSampler {
        &self.sampler
    }

    pub fn serial(&self) -> &S {
        self.emitter.serial()
    }
}

fn transmit<S: SerialTx>(emitter: &mut EventEmitter<S>, event: Event) {
    if let Err(_e) = emitter.emit(event) {
        warn!("serial: dropped {}: {}", event, _e);
    }
}
