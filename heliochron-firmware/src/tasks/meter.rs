//! Meter control task
//!
//! Runs the core measurement loop against the board's display, photocell
//! and button at a fixed polling cadence, and logs every mode change.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Ticker};

use heliochron_core::state::State;
use heliochron_core::SolarTimer;
use heliochron_drivers::clock::TickClock;
use heliochron_drivers::display::SegmentPanel;
use heliochron_drivers::sensor::Photocell;
use heliochron_hal_rp2040::{
    BoardAdc, BusyDelay, InputBridge, InputPin, OutputBridge, SystemTimer,
};

/// Polling interval for the button and light level
pub const POLL_PERIOD: Duration = Duration::from_millis(10);

/// Bus pin bridge over a board GPIO output
pub type BusPin = OutputBridge<Output<'static>>;
/// The board's display panel driver
pub type BoardPanel = SegmentPanel<BusPin, BusPin, BusPin, BusyDelay>;
/// The board's photocell sensor
pub type BoardSensor = Photocell<BoardAdc<'static>>;
/// The board's sub-second clock
pub type BoardClock = TickClock<SystemTimer>;
/// The fully wired meter
pub type BoardMeter = SolarTimer<'static, BoardPanel, BoardSensor, BoardClock>;

/// Meter control task
#[embassy_executor::task]
pub async fn meter_task(mut meter: BoardMeter, mut button: InputBridge<Input<'static>>) {
    info!("Meter task started");

    let mut ticker = Ticker::every(POLL_PERIOD);
    let mut last_state = meter.state();

    loop {
        ticker.next().await;

        // The button closes to ground, so pressed reads low
        meter.tick(button.is_low());

        let state = meter.state();
        if state != last_state {
            report_transition(state, &meter);
            last_state = state;
        }
    }
}

fn report_transition(state: State, meter: &BoardMeter) {
    match state {
        State::Inactive => info!("Meter idle, result cleared"),
        State::Measuring {
            baseline,
            drop_reached: false,
        } => info!("Measurement armed, baseline {}", baseline),
        State::Measuring {
            drop_reached: true, ..
        } => info!("Light drop detected, counting seconds"),
        State::Finished => {
            let result = meter.result();
            info!(
                "Measurement finished: {}s {}ms",
                result.seconds, result.millis
            );
        }
    }
}
