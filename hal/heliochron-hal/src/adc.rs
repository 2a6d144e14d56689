//! Analog-to-digital converter abstraction
//!
//! The instrument reads a single photocell through one ADC channel. The
//! trait mirrors the small surface it needs: pick a channel, switch the
//! converter on, read the most recent conversion.

/// Analog-to-digital converter access
///
/// Conversions are reported in the instrument's native 10-bit range
/// (0..=1023). Implementations for wider converters scale down before
/// reporting.
pub trait AdcConverter {
    /// Route the converter input to the given channel
    fn select_channel(&mut self, channel: u8);

    /// Switch the converter on
    ///
    /// Implementations that are always powered may treat this as a no-op.
    fn enable(&mut self);

    /// Latest completed conversion, 0..=1023
    fn latest_value(&mut self) -> u16;
}
