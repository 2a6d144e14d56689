//! Heliochron - Light-Interruption Duration Meter Firmware
//!
//! Main firmware binary for RP2040-based meter boards. Brings up the
//! shift-register display bus, the photocell ADC and the action button,
//! then hands them to the core measurement loop.
//!
//! Named after the Greek "helios" (ἥλιος, sun) and "chronos" (χρόνος,
//! time) - the instrument times how long a shadow interrupts the light
//! falling on its photocell.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use heliochron_core::config::MeterConfig;
use heliochron_core::{SolarTimer, TickShared};
use heliochron_drivers::clock::TickClock;
use heliochron_drivers::display::SegmentPanel;
use heliochron_drivers::sensor::Photocell;
use heliochron_hal_rp2040::{BoardAdc, BusyDelay, InputBridge, OutputBridge, SystemTimer};

mod tasks;

/// Photocell ADC channel number (GPIO26 = ADC0)
const PHOTOCELL_CHANNEL: u8 = 0;

// Tick state shared between the 1 Hz tick task and the meter loop
// (must live forever for task references)
static TICK_SHARED: StaticCell<TickShared> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Heliochron firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Display bus pin assignments are board-specific:
    // decoder select A = GPIO2, select B = GPIO3, serial data = GPIO4.
    // Selects start high so the decoder sits on its unused idle output.
    let select_a = OutputBridge::new(Output::new(p.PIN_2, Level::High));
    let select_b = OutputBridge::new(Output::new(p.PIN_3, Level::High));
    let data = OutputBridge::new(Output::new(p.PIN_4, Level::Low));
    let panel = SegmentPanel::new(select_a, select_b, data, BusyDelay::new());
    info!("Display bus initialized");

    // Photocell on GPIO26 (ADC0)
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let photo_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let sensor = Photocell::new(BoardAdc::new(adc, photo_channel), PHOTOCELL_CHANNEL);
    info!("Photocell ADC initialized");

    // Action button on GPIO5, closes to ground against the internal pull-up
    let button = InputBridge::new(Input::new(p.PIN_5, Pull::Up));

    let ticks: &'static TickShared = TICK_SHARED.init(TickShared::new());

    let meter = SolarTimer::new(
        panel,
        sensor,
        TickClock::new(SystemTimer::new()),
        ticks,
        MeterConfig::default(),
    );

    // Spawn tasks
    spawner.spawn(tasks::tick_task(ticks)).unwrap();
    spawner.spawn(tasks::meter_task(meter, button)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
