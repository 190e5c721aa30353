//! serial-remote firmware for nRF52840.
//!
//! Two execution contexts, mirroring the bare-metal design:
//!
//! - **Interrupt priority** (`InterruptExecutor` on EGU1_SWI1): the 1 ms
//!   tick task and one edge task per button. These preempt the main loop,
//!   so the clock and debounce keep running even while it is blocked on
//!   an analog conversion.
//! - **Thread mode** (`#[embassy_executor::main]`): the cooperative main
//!   loop calling `Remote::step` forever.

#![no_std]
#![no_main]

mod board;

use defmt::{info, unwrap};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_nrf::{bind_interrupts, peripherals, saadc, uarte};
use embassy_time::{Duration, Ticker};
use serial_remote::config::{TICK_PERIOD_MS, UART_BAUD};
use serial_remote::{ButtonId, Remote, SharedState};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use board::{SaadcConverter, UarteSerial};

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
    SAADC => saadc::InterruptHandler;
});

/// Rejected at compile time if `UART_BAUD` is not a UARTE rate.
const UART_BAUDRATE: uarte::Baudrate = board::baudrate(UART_BAUD);

static EXECUTOR_IRQ: InterruptExecutor = InterruptExecutor::new();
static SHARED: StaticCell<SharedState> = StaticCell::new();

#[interrupt]
unsafe fn EGU1_SWI1() {
    EXECUTOR_IRQ.on_interrupt()
}

/// Tick source: one clock increment per millisecond.
#[embassy_executor::task]
async fn tick_task(shared: &'static SharedState) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));
    loop {
        ticker.next().await;
        shared.clock.tick();
    }
}

/// Edge capture for one button (active-low, internal pull-up).
///
/// GPIOTE acknowledges the event before waking us; we only debounce.
#[embassy_executor::task(pool_size = 2)]
async fn button_task(mut pin: Input<'static>, id: ButtonId, shared: &'static SharedState) -> ! {
    loop {
        pin.wait_for_falling_edge().await;
        shared.on_button_edge(id);
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("serial-remote starting");

    let shared: &'static SharedState = SHARED.init(SharedState::new());

    // UART
    let mut uart_config = uarte::Config::default();
    uart_config.parity = uarte::Parity::EXCLUDED;
    uart_config.baudrate = UART_BAUDRATE;
    let uart = uarte::Uarte::new(p.UARTE0, Irqs, p.P0_08, p.P0_06, uart_config);

    // Analog input on AIN1 (P0.03)
    let channel = saadc::ChannelConfig::single_ended(p.P0_03);
    let adc = saadc::Saadc::new(p.SAADC, Irqs, saadc::Config::default(), [channel]);
    let adc = SaadcConverter::new(adc).await;

    // Interrupt-priority context
    interrupt::EGU1_SWI1.set_priority(Priority::P6);
    let irq_spawner = EXECUTOR_IRQ.start(interrupt::EGU1_SWI1);
    unwrap!(irq_spawner.spawn(tick_task(shared)));
    unwrap!(irq_spawner.spawn(button_task(
        Input::new(p.P0_11, Pull::Up),
        ButtonId::A,
        shared
    )));
    unwrap!(irq_spawner.spawn(button_task(
        Input::new(p.P0_12, Pull::Up),
        ButtonId::B,
        shared
    )));

    // Main loop
    let mut remote = Remote::new(adc, UarteSerial::new(uart));
    info!("serial-remote running");
    loop {
        remote.step(shared);
        embassy_futures::yield_now().await;
    }
}
