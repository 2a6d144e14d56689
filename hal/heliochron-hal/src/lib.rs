//! Heliochron Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs (RP2040, AVR, etc.). This enables the same
//! instrument logic to run on different hardware platforms.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Instrument (heliochron-firmware, etc.)  │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │  heliochron-hal (this crate - traits)    │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │  heliochron-hal-rp2040                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`adc::AdcConverter`] - Analog conversion access
//! - [`timer::TickTimer`] - Free-running tick counter
//! - [`delay::DelayUs`] - Short busy-wait delays

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod delay;
pub mod gpio;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use adc::AdcConverter;
pub use delay::{DelayUs, NoopDelay};
pub use gpio::{InputPin, OutputPin};
pub use timer::TickTimer;
