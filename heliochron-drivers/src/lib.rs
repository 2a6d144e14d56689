//! Hardware driver implementations
//!
//! Concrete implementations of the collaborator traits defined in
//! `heliochron-core`, generic over the `heliochron-hal` pin and timer
//! abstractions:
//!
//! - Shift-register bus and 7-segment panel driver
//! - Photocell light sensor
//! - Sub-second clock over the free-running hardware timer

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod display;
pub mod sensor;
