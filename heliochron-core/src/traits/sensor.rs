//! Light input trait

/// Trait for the photocell input
///
/// Readings are raw ADC counts, 0..=1023, brighter is higher. No
/// filtering or averaging is applied; the drop/recovery hysteresis is the
/// only noise rejection in the system.
pub trait LightSensor {
    /// Latest light level
    ///
    /// Takes `&mut self` because ADC reads typically require mutable
    /// access.
    fn read_level(&mut self) -> u16;
}
