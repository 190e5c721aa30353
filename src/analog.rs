//! Interval-driven analog sampling with change suppression.
//!
//! Every [`ADC_READ_INTERVAL_MS`] the main loop converts one sample,
//! scales millivolts down by [`ADC_SCALE_DIVISOR_MV`] (0-5000 mV → 0-100)
//! and hands the result on only if it differs from the last value sent.
//!
//! The conversion wait is a busy-poll on the converter's completion flag.
//! By default it has no bound: a converter that never finishes stalls the
//! main loop, exactly like the hardware it models. `with_conversion_limit`
//! opts into a bounded wait that gives up with `Error::ConversionTimeout`.

use crate::clock::elapsed;
use crate::config::{ADC_CHANNEL, ADC_READ_INTERVAL_MS, ADC_SCALE_DIVISOR_MV};
use crate::error::Error;
use crate::hal::AnalogConverter;

/// Scale a millivolt reading to the transmitted range (truncating).
#[inline]
pub fn scale_mv(raw_mv: u32) -> u32 {
    raw_mv / ADC_SCALE_DIVISOR_MV
}

pub struct AnalogSampler {
    /// Last value actually handed on; `None` until the first sample.
    last_sent_value: Option<u32>,
    last_sample_time: u32,
    /// Max completion polls per conversion; `None` waits forever.
    conversion_limit: Option<u32>,
}

impl AnalogSampler {
    pub const fn new() -> Self {
        Self {
            last_sent_value: None,
            last_sample_time: 0,
            conversion_limit: None,
        }
    }

    /// Bound the conversion wait to `polls` completion checks.
    pub const fn with_conversion_limit(mut self, polls: u32) -> Self {
        self.conversion_limit = Some(polls);
        self
    }

    pub fn last_sent_value(&self) -> Option<u32> {
        self.last_sent_value
    }

    pub fn last_sample_time(&self) -> u32 {
        self.last_sample_time
    }

    /// Whether a sample is due at `now`.
    pub fn is_due(&self, now: u32) -> bool {
        elapsed(now, self.last_sample_time) >= ADC_READ_INTERVAL_MS
    }

    /// One main-loop iteration.
    ///
    /// Returns `Ok(Some(value))` when a new value must be transmitted,
    /// `Ok(None)` when nothing is due or the value is unchanged. The
    /// caller is expected to transmit whatever comes back; the value is
    /// recorded as sent here.
    pub fn poll<A: AnalogConverter>(&mut self, adc: &mut A, now: u32) -> Result<Option<u32>, Error> {
        if !self.is_due(now) {
            return Ok(None);
        }
        // Advances even if the conversion or the transmit fails.
        self.last_sample_time = now;

        let raw_mv = self.convert(adc)?;
        let scaled = scale_mv(raw_mv);

        if self.last_sent_value == Some(scaled) {
            trace!("adc {} mV -> {} (unchanged)", raw_mv, scaled);
            return Ok(None);
        }
        debug!("adc {} mV -> {}", raw_mv, scaled);
        self.last_sent_value = Some(scaled);
        Ok(Some(scaled))
    }

    fn convert<A: AnalogConverter>(&self, adc: &mut A) -> Result<u32, Error> {
        adc.start_conversion(ADC_CHANNEL);
        match self.conversion_limit {
            None => {
                while !adc.is_complete() {
                    core::hint::spin_loop();
                }
            }
            Some(limit) => {
                let mut polls = 0;
                while !adc.is_complete() {
                    polls += 1;
                    if polls >= limit {
                        warn!("adc: no completion after {} polls", polls);
                        return Err(Error::ConversionTimeout);
                    }
                    core::hint::spin_loop();
                }
            }
        }
        Ok(adc.read_result_mv())
    }
}

impl Default for AnalogSampler {
    fn default() -> Self {
        Self::new()
    }
}
