//! Digital pin bridges
//!
//! Adapts any infallible embedded-hal 1.0 pin, which is what `embassy-rp`
//! hands out, to the shared `heliochron-hal` pin traits. The error type is
//! pinned to [`Infallible`] so absorption is a static fact, not a swallowed
//! failure.

use core::convert::Infallible;

use embedded_hal::digital;

/// Output pin adapter over an infallible embedded-hal pin
pub struct OutputBridge<P> {
    pin: P,
}

impl<P> OutputBridge<P>
where
    P: digital::StatefulOutputPin<Error = Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P> heliochron_hal::gpio::OutputPin for OutputBridge<P>
where
    P: digital::StatefulOutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }

    fn is_set_high(&mut self) -> bool {
        match self.pin.is_set_high() {
            Ok(level) => level,
            Err(e) => match e {},
        }
    }
}

/// Input pin adapter over an infallible embedded-hal pin
pub struct InputBridge<P> {
    pin: P,
}

impl<P> InputBridge<P>
where
    P: digital::InputPin<Error = Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P> heliochron_hal::gpio::InputPin for InputBridge<P>
where
    P: digital::InputPin<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => level,
            Err(e) => match e {},
        }
    }
}
