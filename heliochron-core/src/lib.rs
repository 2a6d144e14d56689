//! Board-agnostic core logic for the light-interruption meter
//!
//! This crate contains all instrument logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware collaborator traits (display, light sensor, clock)
//! - State machine for the measurement cycle
//! - 7-segment glyph encoding and decimal decomposition
//! - Drop/recovery hysteresis policy
//! - Elapsed-time bookkeeping with tick-rollover correction
//! - Button edge detection
//! - Tick-interrupt shared state (refresh flag, seconds counter)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod button;
pub mod config;
pub mod light;
pub mod meter;
pub mod segments;
pub mod state;
pub mod stopwatch;
pub mod tick;
pub mod traits;
pub mod value;

pub use meter::SolarTimer;
pub use tick::TickShared;
