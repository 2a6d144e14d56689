//! Embassy async tasks
//!
//! Each task runs independently; they share the tick state through a
//! single static reference handed out at spawn time.

pub mod meter;
pub mod tick;

pub use meter::meter_task;
pub use tick::tick_task;
