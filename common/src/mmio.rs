//! Memory-mapped I/O primitive.
//!
//! Peripherals in this system expose their registers as 32-bit words at
//! fixed byte offsets from a base address. Drivers never dereference raw
//! pointers themselves; they go through [`Mmio`] so the register traffic can
//! be observed (and replaced) in tests.

use core::num::NonZeroUsize;
use core::ptr::{read_volatile, write_volatile};

/// Access to a block of 32-bit registers addressed by byte offset.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Mmio {
    /// Read the register at `offset`.
    fn read32(&self, offset: usize) -> u32;

    /// Write `value` to the register at `offset`.
    fn write32(&mut self, offset: usize, value: u32);

    /// Replace the bits selected by `mask` with the matching bits of `value`,
    /// leaving every other bit of the register untouched.
    ///
    /// `mask` and `value` are given in register position (already shifted).
    fn read_modify_write32(&mut self, offset: usize, mask: u32, value: u32) {
        let current = self.read32(offset);
        self.write32(offset, (current & !mask) | (value & mask));
    }
}

/// A register block at a fixed, non-null base address.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MmioRegion {
    base: NonZeroUsize,
}

impl MmioRegion {
    /// Bind a region to `base`.
    ///
    /// Returns `None` for a null base address.
    ///
    /// # Safety
    ///
    /// - `base` must point to the register block of a mapped peripheral
    /// - Memory must be mapped as device memory for every offset used
    pub const unsafe fn new(base: usize) -> Option<Self> {
        match NonZeroUsize::new(base) {
            Some(base) => Some(Self { base }),
            None => None,
        }
    }

    pub const fn base(&self) -> usize {
        self.base.get()
    }

    #[inline]
    fn reg(&self, offset: usize) -> *mut u32 {
        debug_assert!(offset % 4 == 0, "unaligned register offset {offset:#x}");
        (self.base.get() + offset) as *mut u32
    }
}

impl Mmio for MmioRegion {
    #[inline]
    fn read32(&self, offset: usize) -> u32 {
        // SAFETY: guaranteed by the contract of `MmioRegion::new`.
        unsafe { read_volatile(self.reg(offset)) }
    }

    #[inline]
    fn write32(&mut self, offset: usize, value: u32) {
        // SAFETY: guaranteed by the contract of `MmioRegion::new`.
        unsafe { write_volatile(self.reg(offset), value) }
    }
}
