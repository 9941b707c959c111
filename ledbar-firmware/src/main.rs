//! Ledbar - Zig-zag LED Matrix Text Display
//!
//! Main firmware binary for an RP2040 driving a serpentine WS2812 strip
//! folded into a 30x5 matrix. Text commands arrive over UART0; a single
//! render task owns the strip.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use ledbar_core::{Color, Grid, ScrollEngine};

use crate::config::load_config;

mod channels;
mod clock;
mod config;
mod strip;
mod tasks;

/// Matrix geometry: 5 rows of 30 LEDs, first row running left to right
pub const GRID: Grid = Grid::new(30, 5);

/// LEDs on the strip
pub const LED_COUNT: usize = GRID.pixel_count();

/// Embedded default settings (compiled into firmware)
/// Edit ledbar.ini and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../ledbar.ini");

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Ledbar firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config(EMBEDDED_CONFIG);

    // WS2812 data line on GPIO14, driven by PIO0 state machine 0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let ws2812 = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_14, &program);

    let mut engine: tasks::Engine =
        ScrollEngine::with_config(GRID, &config, strip::StripTransmit::new(ws2812), Delay);
    // Clear whatever the strip latched before reset
    engine.fill_color(Color::BLACK);

    info!(
        "LED matrix initialized: {}x{} ({} LEDs)",
        GRID.width(),
        GRID.height(),
        LED_COUNT
    );

    // Command UART, 115200 baud default
    let uart_config = UartConfig::default();

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for commands");

    spawner.spawn(tasks::render_task(engine)).unwrap();
    spawner.spawn(tasks::command_rx_task(rx, tx)).unwrap();
    spawner
        .spawn(tasks::clock_task(config.clock_offset_s))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
