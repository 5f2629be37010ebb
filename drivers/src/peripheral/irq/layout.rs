//! Interrupt register layout of a peripheral.
//!
//! The layout is data, not code: each peripheral supplies its line count and
//! the offsets of its state, enable and test registers (one per bank, in
//! ascending bank order) as a `const` value taken from its register map.

use super::index::{BitIndex, bank_count, valid_bits};

/// How an interrupt line behaves once raised.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IrqType {
    /// Latched on an edge; stays pending until acknowledged.
    Event,
    /// Follows a hardware condition; acknowledging has no effect.
    Status,
}

/// Register layout for `BANKS` interrupt banks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IrqLayout<const BANKS: usize> {
    lines: u32,
    state: [usize; BANKS],
    enable: [usize; BANKS],
    test: [usize; BANKS],
    status_lines: [u32; BANKS],
}

impl<const BANKS: usize> IrqLayout<BANKS> {
    /// Describe a peripheral with `lines` interrupt lines, all of them
    /// [`IrqType::Event`].
    ///
    /// # Panics
    ///
    /// At compile time (when used in a `const`) if `lines` is zero or does
    /// not need exactly `BANKS` banks.
    pub const fn new(
        lines: u32,
        state: [usize; BANKS],
        enable: [usize; BANKS],
        test: [usize; BANKS],
    ) -> Self {
        assert!(lines > 0, "a peripheral needs at least one interrupt line");
        assert!(
            bank_count(lines) == BANKS,
            "bank tables do not match the line count"
        );

        Self {
            lines,
            state,
            enable,
            test,
            status_lines: [0; BANKS],
        }
    }

    /// Mark the lines set in `mask` (one word per bank) as
    /// [`IrqType::Status`].
    pub const fn with_status_lines(mut self, mask: [u32; BANKS]) -> Self {
        self.status_lines = mask;
        self
    }

    /// Number of interrupt lines.
    pub const fn lines(&self) -> u32 {
        self.lines
    }

    /// Number of register banks.
    pub const fn banks(&self) -> usize {
        BANKS
    }

    pub const fn state_offset(&self, bank: usize) -> usize {
        self.state[bank]
    }

    pub const fn enable_offset(&self, bank: usize) -> usize {
        self.enable[bank]
    }

    pub const fn test_offset(&self, bank: usize) -> usize {
        self.test[bank]
    }

    /// Type of the line at `index`.
    pub const fn irq_type(&self, index: BitIndex) -> IrqType {
        if index.test(self.status_lines[index.bank]) {
            IrqType::Status
        } else {
            IrqType::Event
        }
    }

    /// Bits of bank `bank` that correspond to real lines.
    ///
    /// Only the last bank can be partial.
    pub const fn valid_mask(&self, bank: usize) -> u32 {
        valid_bits(self.lines, bank)
    }
}
