//! Peripheral Drivers
//!
//! # Available Peripherals
//!
//! - [`irq`]: Generic interrupt register core shared by all peripherals
//! - [`rv_timer`]: RISC-V timer

pub mod irq;
pub mod rv_timer;
