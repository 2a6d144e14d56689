//! State machine for the measurement cycle
//!
//! Defines the authoritative runtime behavior of the meter.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
