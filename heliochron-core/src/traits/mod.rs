//! Hardware collaborator traits
//!
//! These traits define the interface between the meter logic and
//! hardware-specific implementations, so the whole measurement cycle can
//! be exercised on the host with mock collaborators.

pub mod clock;
pub mod display;
pub mod sensor;

pub use clock::SubsecondClock;
pub use display::SegmentDisplay;
pub use sensor::LightSensor;
