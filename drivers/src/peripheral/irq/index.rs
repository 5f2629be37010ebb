//! Interrupt index mapping.
//!
//! A peripheral numbers its interrupt lines `0..N`. Line `i` lives in bank
//! `i / 32` at bit `i % 32` of every register kind.

use crate::hal::interrupt::{IrqError, IrqResult};

/// Width of one interrupt register bank.
pub const BANK_WIDTH: u32 = 32;

/// Number of banks needed to hold `lines` interrupt lines.
pub const fn bank_count(lines: u32) -> usize {
    lines.div_ceil(BANK_WIDTH) as usize
}

/// Bits of bank `bank` that hold one of `lines` lines; the rest is padding.
pub const fn valid_bits(lines: u32, bank: usize) -> u32 {
    let first = bank as u32 * BANK_WIDTH;
    if lines <= first {
        0
    } else if lines - first >= BANK_WIDTH {
        u32::MAX
    } else {
        (1 << (lines - first)) - 1
    }
}

/// A raw interrupt line number.
///
/// Any `u32` can be wrapped, so every operation re-checks it against the
/// peripheral's line count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IrqId(pub u32);

impl From<u32> for IrqId {
    fn from(value: u32) -> Self {
        IrqId(value)
    }
}

/// Position of an interrupt line inside the register banks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BitIndex {
    /// Register bank, `0..bank_count(N)`.
    pub bank: usize,
    /// Bit within the bank, `0..32`.
    pub bit: u32,
}

impl BitIndex {
    /// Single-bit mask selecting this line within its bank.
    #[inline]
    pub const fn mask(self) -> u32 {
        1 << self.bit
    }

    /// Extract this line's bit from a bank value.
    #[inline]
    pub const fn test(self, word: u32) -> bool {
        (word >> self.bit) & 0x1 == 0x1
    }
}

/// Map `line` to its bank and bit, rejecting lines at or beyond `lines`.
pub fn map(line: IrqId, lines: u32) -> IrqResult<BitIndex> {
    if line.0 >= lines {
        return Err(IrqError::BadArgument);
    }

    Ok(BitIndex {
        bank: (line.0 / BANK_WIDTH) as usize,
        bit: line.0 % BANK_WIDTH,
    })
}
