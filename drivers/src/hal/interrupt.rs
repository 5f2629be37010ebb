//! Interrupt Controller Hardware Abstraction Layer.
//!
//! This module defines platform-independent traits and the error taxonomy
//! shared by every interrupt operation.

use core::fmt;

/// Interrupt number type.
pub type IrqNumber = u32;

/// Interrupt operation errors.
///
/// Every failure at this layer is caller misuse that could have been
/// detected statically; none are transient hardware faults.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IrqError {
    /// An interrupt index outside the peripheral's lines, a register bank
    /// that does not exist, a snapshot of the wrong width, or an absent
    /// device.
    BadArgument,
}

impl fmt::Display for IrqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrqError::BadArgument => f.write_str("invalid interrupt argument"),
        }
    }
}

/// Result of an interrupt operation.
pub type IrqResult<T> = Result<T, IrqError>;

/// Interrupt controller trait.
///
/// This trait represents a peripheral that raises interrupt lines.
pub trait InterruptController {
    /// Error type for interrupt controller operations.
    type Error: core::fmt::Debug;

    /// Enable (unmask) an interrupt line.
    fn enable(&mut self, irq: IrqNumber) -> Result<(), Self::Error>;

    /// Disable (mask) an interrupt line.
    fn disable(&mut self, irq: IrqNumber) -> Result<(), Self::Error>;

    /// Check if an interrupt is currently pending.
    fn is_pending(&self, irq: IrqNumber) -> Result<bool, Self::Error>;

    /// Get the lowest-numbered pending interrupt, or `None`
    /// if no interrupts are pending.
    fn next_pending(&self) -> Option<IrqNumber>;

    /// Clear a pending interrupt.
    ///
    /// Some controllers require explicit acknowledgment.
    fn clear(&mut self, irq: IrqNumber) -> Result<(), Self::Error> {
        let _ = irq;
        Ok(())
    }
}
