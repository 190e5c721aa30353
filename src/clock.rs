//! Millisecond tick source.
//!
//! A single `u32` counter, bumped once per timer interrupt and read by
//! the main loop. It wraps after ~49.7 days; every elapsed-time check in
//! the crate goes through [`elapsed`] so wraparound is harmless.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::hal::InterruptFlag;

/// Wrap-safe `now - since`, correct modulo 2^32.
#[inline]
pub fn elapsed(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Monotonic millisecond counter shared between interrupt and main loop.
pub struct Clock {
    ticks: AtomicU32,
}

impl Clock {
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
        }
    }

    /// Timer interrupt handler: acknowledge, then advance by one tick.
    pub fn on_timer_interrupt<F: InterruptFlag>(&self, flag: &mut F) {
        flag.clear();
        self.tick();
    }

    /// Advance by one tick. Wait-free; the only writer is interrupt context.
    #[inline]
    pub fn tick(&self) {
        // Single writer, so load + store never loses an increment and
        // works on cores without atomic read-modify-write.
        let next = self.ticks.load(Ordering::Relaxed).wrapping_add(1);
        self.ticks.store(next, Ordering::Release);
    }

    /// Current tick count.
    #[inline]
    pub fn now(&self) -> u32 {
        self.ticks.load(Ordering::Acquire)
    }

    /// Preload the counter, e.g. to start a run just short of the 2^32 wrap.
    pub fn set(&self, ticks: u32) {
        self.ticks.store(ticks, Ordering::Release);
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
