//! Display output trait

use crate::value::DisplayValue;

/// Trait for the 3-digit 7-segment display
///
/// Implementations own the transmission protocol; the meter logic only
/// decides what to show.
pub trait SegmentDisplay {
    /// Show a decomposed decimal value
    fn render(&mut self, value: DisplayValue);

    /// Show the placeholder glyph (dashes) on all digits
    fn render_placeholder(&mut self);

    /// Show a raw integer
    fn render_value(&mut self, value: u16) {
        self.render(DisplayValue::new(value));
    }
}
