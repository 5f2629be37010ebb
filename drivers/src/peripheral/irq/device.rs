//! Interrupt register access.
//!
//! [`Irq`] binds an MMIO region to a peripheral's [`IrqLayout`] and exposes
//! the per-line and whole-peripheral operations on its interrupt registers.
//!
//! Every operation validates its arguments before touching hardware, so a
//! rejected call performs no register access at all. Bulk operations visit
//! banks in ascending order and are not atomic across banks.

use super::index::{self, BitIndex, IrqId};
use super::layout::{IrqLayout, IrqType};
use super::snapshot::IrqSnapshot;
use crate::hal::interrupt::{IrqError, IrqResult};
use common::{Mmio, Toggle};
use log::{debug, trace, warn};

/// Interrupt registers of one peripheral instance.
#[derive(Debug)]
pub struct Irq<M: Mmio, const BANKS: usize> {
    mmio: M,
    layout: &'static IrqLayout<BANKS>,
}

impl<M: Mmio, const BANKS: usize> Irq<M, BANKS> {
    pub const fn new(mmio: M, layout: &'static IrqLayout<BANKS>) -> Self {
        Self { mmio, layout }
    }

    pub const fn layout(&self) -> &'static IrqLayout<BANKS> {
        self.layout
    }

    /// Number of interrupt lines.
    pub const fn lines(&self) -> u32 {
        self.layout.lines()
    }

    pub fn mmio(&self) -> &M {
        &self.mmio
    }

    pub fn mmio_mut(&mut self) -> &mut M {
        &mut self.mmio
    }

    /// A cleared snapshot sized for this peripheral.
    pub const fn empty_snapshot(&self) -> IrqSnapshot<BANKS> {
        IrqSnapshot::new(self.layout.lines())
    }

    fn map(&self, line: IrqId) -> IrqResult<BitIndex> {
        index::map(line, self.layout.lines()).inspect_err(|_| {
            warn!(
                "irq {} out of range ({} lines)",
                line.0,
                self.layout.lines()
            )
        })
    }

    fn check_width(&self, snapshot: &IrqSnapshot<BANKS>) -> IrqResult<()> {
        if snapshot.width() != self.layout.lines() {
            warn!(
                "snapshot of {} lines used with {} lines",
                snapshot.width(),
                self.layout.lines()
            );
            return Err(IrqError::BadArgument);
        }
        Ok(())
    }

    // ========================================================================
    // State
    // ========================================================================

    /// Raw value of the state register of bank `bank`.
    pub fn get_state(&self, bank: usize) -> IrqResult<u32> {
        if bank >= BANKS {
            warn!("irq state bank {} out of range ({} banks)", bank, BANKS);
            return Err(IrqError::BadArgument);
        }

        let value = self.mmio.read32(self.layout.state_offset(bank));
        trace!("irq state[{bank}] = {value:#010x}");
        Ok(value)
    }

    /// State of every line, one bank at a time.
    pub fn get_state_all(&self) -> IrqSnapshot<BANKS> {
        let mut snapshot = self.empty_snapshot();
        for bank in 0..BANKS {
            snapshot.set_word(bank, self.mmio.read32(self.layout.state_offset(bank)));
        }
        snapshot
    }

    /// Whether `line` is pending.
    pub fn is_pending(&self, line: impl Into<IrqId>) -> IrqResult<bool> {
        let pos = self.map(line.into())?;
        let state = self.mmio.read32(self.layout.state_offset(pos.bank));
        Ok(pos.test(state))
    }

    /// Whether `line` is an event or a status interrupt.
    pub fn get_type(&self, line: impl Into<IrqId>) -> IrqResult<IrqType> {
        let pos = self.map(line.into())?;
        Ok(self.layout.irq_type(pos))
    }

    /// Clear a pending `line`.
    ///
    /// State registers are write-1-to-clear, so only the target bit is
    /// written and the rest of the bank is left alone by hardware.
    pub fn acknowledge(&mut self, line: impl Into<IrqId>) -> IrqResult<()> {
        let pos = self.map(line.into())?;
        let offset = self.layout.state_offset(pos.bank);
        trace!("irq ack bank {} bit {}", pos.bank, pos.bit);
        self.mmio.write32(offset, pos.mask());
        Ok(())
    }

    /// Clear every line set in `snapshot`, typically one returned by
    /// [`Irq::get_state_all`].
    pub fn acknowledge_state(&mut self, snapshot: &IrqSnapshot<BANKS>) -> IrqResult<()> {
        self.check_width(snapshot)?;
        for bank in 0..BANKS {
            self.mmio
                .write32(self.layout.state_offset(bank), snapshot.word(bank));
        }
        Ok(())
    }

    /// Clear every pending line.
    pub fn acknowledge_all(&mut self) {
        debug!("irq ack all ({} banks)", BANKS);
        for bank in 0..BANKS {
            self.mmio.write32(self.layout.state_offset(bank), u32::MAX);
        }
    }

    /// Raise `line` through the test register.
    pub fn force(&mut self, line: impl Into<IrqId>) -> IrqResult<()> {
        let pos = self.map(line.into())?;
        let offset = self.layout.test_offset(pos.bank);
        trace!("irq force bank {} bit {}", pos.bank, pos.bit);
        self.mmio.write32(offset, pos.mask());
        Ok(())
    }

    // ========================================================================
    // Enable
    // ========================================================================

    pub fn get_enabled(&self, line: impl Into<IrqId>) -> IrqResult<Toggle> {
        let pos = self.map(line.into())?;
        let enable = self.mmio.read32(self.layout.enable_offset(pos.bank));
        Ok(Toggle::from(pos.test(enable)))
    }

    /// Enable or disable `line`, preserving every other line in its bank.
    pub fn set_enabled(&mut self, line: impl Into<IrqId>, state: Toggle) -> IrqResult<()> {
        let pos = self.map(line.into())?;
        let offset = self.layout.enable_offset(pos.bank);
        let value = if state.is_enabled() { pos.mask() } else { 0 };
        trace!("irq enable bank {} bit {} -> {:?}", pos.bank, pos.bit, state);
        self.mmio.read_modify_write32(offset, pos.mask(), value);
        Ok(())
    }

    /// Enable mask of every line, without modifying it.
    pub fn get_enabled_all(&self) -> IrqSnapshot<BANKS> {
        let mut snapshot = self.empty_snapshot();
        for bank in 0..BANKS {
            snapshot.set_word(bank, self.mmio.read32(self.layout.enable_offset(bank)));
        }
        snapshot
    }

    /// Disable every line.
    ///
    /// With `snapshot`, each bank's enable register is read into it just
    /// before that bank is cleared, so it can later be handed to
    /// [`Irq::restore_all`].
    pub fn disable_all(&mut self, mut snapshot: Option<&mut IrqSnapshot<BANKS>>) {
        debug!(
            "irq disable all ({} banks, snapshot: {})",
            BANKS,
            snapshot.is_some()
        );

        if let Some(out) = snapshot.as_deref_mut() {
            *out = self.empty_snapshot();
        }

        for bank in 0..BANKS {
            let offset = self.layout.enable_offset(bank);
            if let Some(out) = snapshot.as_deref_mut() {
                out.set_word(bank, self.mmio.read32(offset));
            }
            self.mmio.write32(offset, 0);
        }
    }

    /// Write `snapshot` back to the enable registers.
    pub fn restore_all(&mut self, snapshot: &IrqSnapshot<BANKS>) -> IrqResult<()> {
        self.check_width(snapshot)?;
        debug!("irq restore all ({} banks)", BANKS);
        for bank in 0..BANKS {
            self.mmio
                .write32(self.layout.enable_offset(bank), snapshot.word(bank));
        }
        Ok(())
    }
}
