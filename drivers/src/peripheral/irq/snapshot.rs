//! Multi-bank interrupt snapshots.
//!
//! A snapshot holds one bit per interrupt line, stored as the ordered
//! sequence of 32-bit bank words it was read from (or will be written to).
//! Bit `i` of the snapshot is bit `i % 32` of word `i / 32`.
//!
//! Bits of the last word beyond the line count are padding. They are kept
//! exactly as read from hardware, and are ignored by the line-level queries
//! ([`IrqSnapshot::bit`], [`IrqSnapshot::is_clear`], [`IrqSnapshot::iter`]).

use super::index::{self, IrqId, bank_count, valid_bits};
use crate::hal::interrupt::IrqResult;

/// An N-bit interrupt mask spanning `BANKS` register banks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IrqSnapshot<const BANKS: usize> {
    words: [u32; BANKS],
    width: u32,
}

impl<const BANKS: usize> IrqSnapshot<BANKS> {
    /// An all-clear snapshot of `width` lines.
    pub const fn new(width: u32) -> Self {
        Self::pack([0; BANKS], width)
    }

    /// Build a snapshot from per-bank words, lowest bank first.
    pub const fn pack(words: [u32; BANKS], width: u32) -> Self {
        assert!(
            bank_count(width) == BANKS,
            "snapshot width does not match the bank count"
        );
        Self { words, width }
    }

    /// Split the snapshot back into per-bank words, lowest bank first.
    pub const fn unpack(&self) -> [u32; BANKS] {
        self.words
    }

    /// Number of interrupt lines covered.
    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn word(&self, bank: usize) -> u32 {
        self.words[bank]
    }

    /// Store the raw value of bank `bank`.
    pub fn set_word(&mut self, bank: usize, value: u32) {
        self.words[bank] = value;
    }

    /// Whether `line` is set. Lines outside the snapshot read as clear.
    pub fn bit(&self, line: impl Into<IrqId>) -> bool {
        match index::map(line.into(), self.width) {
            Ok(pos) => pos.test(self.words[pos.bank]),
            Err(_) => false,
        }
    }

    /// Set or clear `line`.
    pub fn set_bit(&mut self, line: impl Into<IrqId>, value: bool) -> IrqResult<()> {
        let pos = index::map(line.into(), self.width)?;
        if value {
            self.words[pos.bank] |= pos.mask();
        } else {
            self.words[pos.bank] &= !pos.mask();
        }
        Ok(())
    }

    /// True when no line (padding excluded) is set.
    pub fn is_clear(&self) -> bool {
        self.words
            .iter()
            .enumerate()
            .all(|(bank, word)| word & valid_bits(self.width, bank) == 0)
    }

    /// Lowest set line, if any.
    pub fn first_set(&self) -> Option<IrqId> {
        self.iter().next()
    }

    /// Iterate over set lines in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = IrqId> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(move |(bank, &word)| {
                let mut bits = word & valid_bits(self.width, bank);
                core::iter::from_fn(move || {
                    if bits == 0 {
                        return None;
                    }
                    let bit = bits.trailing_zeros();
                    bits &= bits - 1;
                    Some(IrqId(bank as u32 * index::BANK_WIDTH + bit))
                })
            })
    }
}
