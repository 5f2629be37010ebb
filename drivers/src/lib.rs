//! Interrupt Driver Subsystem
//!
//! This crate gives software a validated way to observe and control the
//! interrupt lines of memory-mapped peripherals whose lines are spread over
//! one or more 32-bit register banks.
//!
//! # Module Organization
//!
//! - [`hal`]: Platform-independent trait definitions
//! - [`hw`]: Generated register maps
//! - [`peripheral`]: Bank-based interrupt core and peripheral drivers
//! - [`platform`]: Top-level instances (base addresses, global handles)
//!
//! # Usage Example
//!
//! ```no_run
//! use drivers::peripheral::rv_timer::{RvTimer, RvTimerIrq};
//! use common::Toggle;
//!
//! let mut timer = unsafe { RvTimer::new(0x4010_0000) }?;
//! let mut saved = timer.irq().empty_snapshot();
//! timer.irq_mut().disable_all(Some(&mut saved));
//! timer.irq_mut().set_enabled(RvTimerIrq::TimerExpiredHart0Timer0, Toggle::Enabled)?;
//! timer.irq_mut().restore_all(&saved)?;
//! # Ok::<(), drivers::hal::interrupt::IrqError>(())
//! ```

#![cfg_attr(not(test), no_std)]

pub mod hal;
pub mod hw;
pub mod peripheral;
pub mod platform;

// Re-export commonly used types
pub use hal::interrupt::{InterruptController, IrqError, IrqResult};
pub use peripheral::irq::{Irq, IrqId, IrqLayout, IrqSnapshot, IrqType};
