//! 1 Hz tick task
//!
//! Fires once per second: bumps the elapsed-seconds counter while a
//! measurement is counting and schedules a display refresh. The meter
//! loop consumes the refresh flag on its next pass.
//!
//! Ticks land on uptime whole-second boundaries, the same instants where
//! the sub-second clock wraps. The stopwatch's rollover borrow is only
//! correct when the two stay in phase.

use defmt::*;
use embassy_time::{Duration, Instant, Timer, TICK_HZ};

use heliochron_core::TickShared;

/// Tick interval - one counted second and one display refresh
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Tick task - advances the shared tick state once per second
#[embassy_executor::task]
pub async fn tick_task(ticks: &'static TickShared) {
    info!("Tick task started");

    // First fire at the next whole-second boundary
    let mut next = Instant::from_ticks((Instant::now().as_ticks() / TICK_HZ + 1) * TICK_HZ);

    loop {
        Timer::at(next).await;
        ticks.on_tick();
        next += TICK_PERIOD;
    }
}
