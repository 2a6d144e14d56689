//! RP2040-specific HAL for the Heliochron meter firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `heliochron-hal` traits over `embassy-rp` peripherals:
//!
//! - Digital pin bridges over the chip's embedded-hal pin types
//! - Blocking ADC front end scaled to the shared 10-bit contract
//! - Free-running tick source over the system timer
//! - Busy-wait delay provider for the display bus settle windows

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod delay;
pub mod gpio;
pub mod timer;

pub use adc::BoardAdc;
pub use delay::BusyDelay;
pub use gpio::{InputBridge, OutputBridge};
pub use timer::SystemTimer;

// Re-export shared traits from heliochron-hal for convenience
pub use heliochron_hal::adc::AdcConverter;
pub use heliochron_hal::delay::DelayUs;
pub use heliochron_hal::gpio::{InputPin, OutputPin};
pub use heliochron_hal::timer::TickTimer;
