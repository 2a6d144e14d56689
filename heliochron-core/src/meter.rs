//! Meter control loop
//!
//! One [`SolarTimer`] value owns every piece of mutable instrument state:
//! the mode machine, the button edge memory, the sub-second stopwatch and
//! the last completed result. The firmware calls [`SolarTimer::tick`]
//! once per loop iteration and routes the periodic 1 Hz interrupt to
//! [`TickShared::on_tick`]; nothing else touches the meter.

use crate::button::ButtonEdge;
use crate::config::MeterConfig;
use crate::light::DropDetector;
use crate::state::{Event, State};
use crate::stopwatch::{ElapsedTime, Stopwatch};
use crate::tick::TickShared;
use crate::traits::{LightSensor, SegmentDisplay, SubsecondClock};

/// The solar timer instrument
///
/// Generic over its hardware collaborators so the full measurement cycle
/// runs on the host under test.
pub struct SolarTimer<'a, D, S, C> {
    display: D,
    sensor: S,
    clock: C,
    ticks: &'a TickShared,
    detector: DropDetector,
    state: State,
    button: ButtonEdge,
    stopwatch: Stopwatch,
    result: ElapsedTime,
}

impl<'a, D, S, C> SolarTimer<'a, D, S, C>
where
    D: SegmentDisplay,
    S: LightSensor,
    C: SubsecondClock,
{
    /// Wire the collaborators and arm the first refresh
    ///
    /// The meter starts in [`State::Inactive`] with a refresh already
    /// pending, so the first loop iteration draws the live light level
    /// without waiting a full tick period.
    pub fn new(
        display: D,
        sensor: S,
        clock: C,
        ticks: &'a TickShared,
        config: MeterConfig,
    ) -> Self {
        ticks.arm_refresh();
        Self {
            display,
            sensor,
            clock,
            ticks,
            detector: DropDetector::new(config.drop_threshold),
            state: State::Inactive,
            button: ButtonEdge::new(),
            stopwatch: Stopwatch::new(),
            result: ElapsedTime::default(),
        }
    }

    /// One control-loop iteration
    ///
    /// `button_raw` is the current level of the action button. Light
    /// transitions run before the refresh check so a measurement that
    /// finishes on this iteration draws its corrected result immediately.
    pub fn tick(&mut self, button_raw: bool) {
        let pressed = self.button.update(button_raw);

        if let State::Measuring {
            baseline,
            drop_reached,
        } = self.state
        {
            self.watch_light(baseline, drop_reached);
        }

        if self.ticks.take_refresh() {
            self.draw();
        }

        if pressed {
            self.on_press();
        }
    }

    /// Current meter state
    pub fn state(&self) -> State {
        self.state
    }

    /// Result of the last completed measurement
    pub fn result(&self) -> ElapsedTime {
        self.result
    }

    fn watch_light(&mut self, baseline: u16, drop_reached: bool) {
        let reading = self.sensor.read_level();
        if drop_reached {
            if self.detector.is_recovery(baseline, reading) {
                let seconds = self.ticks.stop_counting();
                self.result = self.stopwatch.stop(self.clock.subsec_millis(), seconds);
                self.state = self.state.transition(Event::LightRecovered);
            }
        } else if self.detector.is_drop(baseline, reading) {
            self.state = self.state.transition(Event::DropDetected);
        }
    }

    fn draw(&mut self) {
        match self.state {
            State::Inactive => {
                let level = self.sensor.read_level();
                self.display.render_value(level);
            }
            State::Measuring {
                drop_reached: false,
                ..
            } => self.display.render_placeholder(),
            State::Measuring {
                drop_reached: true, ..
            } => self.display.render_value(self.ticks.seconds()),
            State::Finished => self.display.render_value(self.result.seconds),
        }
    }

    fn on_press(&mut self) {
        let light_level = self.sensor.read_level();
        let next = self.state.transition(Event::ButtonPressed { light_level });
        if !self.state.is_measuring() && next.is_measuring() {
            // Arming: pin the sub-second offset and zero the seconds
            // counter before the interrupt can add to it
            self.stopwatch.start(self.clock.subsec_millis());
            self.ticks.start_counting();
        }
        self.state = next;
    }
}
