//! Light sensor drivers

pub mod photocell;

pub use photocell::Photocell;
