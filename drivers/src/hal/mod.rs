//! Hardware Abstraction Layer (HAL) - Platform-Independent Traits
//!
//! These traits are implemented by peripheral drivers, allowing kernel code
//! to manage interrupt sources without knowing which peripheral owns them.
//!
//! # Available Interfaces
//!
//! - [`interrupt`]: Interrupt source management

pub mod interrupt;
