//! nRF52840 implementations of the peripheral contracts.
//!
//! Only compiled into the embedded binary.

use defmt::info;
use embassy_nrf::peripherals::UARTE0;
use embassy_nrf::saadc::Saadc;
use embassy_nrf::uarte::{Baudrate, Uarte};
use serial_remote::hal::{AnalogConverter, SerialTx};
use serial_remote::Error;

/// SAADC full scale with the default gain (1/6) and 0.6 V reference.
const SAADC_FULL_SCALE_MV: u32 = 3600;

/// 12-bit result range.
const SAADC_MAX_COUNT: u32 = 4096;

/// UARTE register setting for `baud`. Panics (at compile time when used
/// in a `const`) for rates the peripheral cannot generate.
pub const fn baudrate(baud: u32) -> Baudrate {
    match baud {
        1_200 => Baudrate::BAUD1200,
        2_400 => Baudrate::BAUD2400,
        4_800 => Baudrate::BAUD4800,
        9_600 => Baudrate::BAUD9600,
        14_400 => Baudrate::BAUD14400,
        19_200 => Baudrate::BAUD19200,
        28_800 => Baudrate::BAUD28800,
        31_250 => Baudrate::BAUD31250,
        38_400 => Baudrate::BAUD38400,
        56_000 => Baudrate::BAUD56000,
        57_600 => Baudrate::BAUD57600,
        76_800 => Baudrate::BAUD76800,
        115_200 => Baudrate::BAUD115200,
        230_400 => Baudrate::BAUD230400,
        250_000 => Baudrate::BAUD250000,
        460_800 => Baudrate::BAUD460800,
        921_600 => Baudrate::BAUD921600,
        1_000_000 => Baudrate::BAUD1M,
        _ => panic!("unsupported UART baud rate"),
    }
}

/// UARTE0 as a blocking line transmitter.
pub struct UarteSerial {
    uart: Uarte<'static, UARTE0>,
}

impl UarteSerial {
    pub fn new(uart: Uarte<'static, UARTE0>) -> Self {
        Self { uart }
    }
}

impl SerialTx for UarteSerial {
    fn transmit(&mut self, line: &str) -> Result<(), Error> {
        self.uart
            .blocking_write(line.as_bytes())
            .map_err(|_| Error::Serial)
    }
}

/// Single-channel SAADC.
///
/// The conversion runs to completion inside `start_conversion` (the SAADC
/// future is spun by `block_on`), so `is_complete` only reports whether a
/// result is waiting. This keeps the main loop blocked for the whole
/// conversion while the interrupt-priority tasks keep running.
pub struct SaadcConverter {
    saadc: Saadc<'static, 1>,
    result: Option<i16>,
}

impl SaadcConverter {
    pub async fn new(saadc: Saadc<'static, 1>) -> Self {
        saadc.calibrate().await;
        info!("saadc: calibrated");
        Self {
            saadc,
            result: None,
        }
    }
}

impl AnalogConverter for SaadcConverter {
    fn start_conversion(&mut self, _channel: u8) {
        // One channel is configured; `_channel` names it on other boards.
        let mut buf = [0i16; 1];
        embassy_futures::block_on(self.saadc.sample(&mut buf));
        self.result = Some(buf[0]);
    }

    fn is_complete(&mut self) -> bool {
        self.result.is_some()
    }

    fn read_result_mv(&mut self) -> u32 {
        // Single-ended readings can dip slightly below zero.
        let raw = self.result.take().unwrap_or(0).max(0) as u32;
        raw * SAADC_FULL_SCALE_MV / SAADC_MAX_COUNT
    }
}
