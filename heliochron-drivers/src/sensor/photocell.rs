//! Photocell input

use heliochron_core::traits::LightSensor;
use heliochron_hal::adc::AdcConverter;

/// Photocell wired to one ADC channel
///
/// Construction routes the converter to the cell's channel and switches
/// it on, so the free-running conversions are already flowing by the
/// time the first level is read. Reads pass the latest conversion
/// through untouched.
pub struct Photocell<A> {
    adc: A,
}

impl<A: AdcConverter> Photocell<A> {
    pub fn new(mut adc: A, channel: u8) -> Self {
        adc.select_channel(channel);
        adc.enable();
        Self { adc }
    }
}

impl<A: AdcConverter> LightSensor for Photocell<A> {
    fn read_level(&mut self) -> u16 {
        self.adc.latest_value()
    }
}
