//! Base library shared by the driver crates.
//!
//! - [`mmio`]: 32-bit memory-mapped register access
//! - [`toggle`]: two-valued enable/disable switch

#![cfg_attr(not(any(test, feature = "mock")), no_std)]

pub mod mmio;
pub mod toggle;

pub use mmio::{Mmio, MmioRegion};
pub use toggle::Toggle;
