//! Display drivers

pub mod bus;
pub mod panel;

pub use bus::{Channel, ShiftBus, SETTLE_US};
pub use panel::SegmentPanel;

#[cfg(test)]
pub(crate) mod testutil;
