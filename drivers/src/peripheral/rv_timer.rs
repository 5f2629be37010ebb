//! RISC-V Timer Interrupt Driver
//!
//! This module exposes the interrupt registers of the RISC-V timer
//! peripheral through the bank-based core in [`crate::peripheral::irq`].
//!
//! # Features
//!
//! - Checked conversion from raw interrupt numbers to [`RvTimerIrq`]
//! - Per-line state, acknowledge, force and enable control
//! - Whole-peripheral enable snapshots for critical sections
//! - Alert test register access
//!
//! # Example
//!
//! ```no_run
//! use common::Toggle;
//! use drivers::peripheral::rv_timer::{RvTimer, RvTimerIrq};
//!
//! let mut timer = unsafe { RvTimer::new(0x4010_0000) }?;
//! let irq = RvTimerIrq::TimerExpiredHart0Timer0;
//!
//! timer.irq_mut().set_enabled(irq, Toggle::Enabled)?;
//! if timer.irq().is_pending(irq)? {
//!     timer.irq_mut().acknowledge(irq)?;
//! }
//! # Ok::<(), drivers::IrqError>(())
//! ```

use super::irq::{Irq, IrqId, IrqLayout, IrqSnapshot, bank_count};
use crate::hal::interrupt::{InterruptController, IrqError, IrqNumber, IrqResult};
use crate::hw::rv_timer::{
    RV_TIMER_ALERT_TEST_FATAL_FAULT_BIT, RV_TIMER_ALERT_TEST_REG_OFFSET,
    RV_TIMER_INTR_ENABLE_REG_OFFSETS, RV_TIMER_INTR_STATE_REG_OFFSETS,
    RV_TIMER_INTR_TEST_REG_OFFSETS, RV_TIMER_PARAM_N_IRQS,
};
use common::{Mmio, MmioRegion, Toggle};
use log::debug;

/// Number of interrupt register banks.
pub const RV_TIMER_IRQ_BANKS: usize = bank_count(RV_TIMER_PARAM_N_IRQS);

/// Interrupt register layout of the timer.
pub static RV_TIMER_IRQ_LAYOUT: IrqLayout<RV_TIMER_IRQ_BANKS> = IrqLayout::new(
    RV_TIMER_PARAM_N_IRQS,
    RV_TIMER_INTR_STATE_REG_OFFSETS,
    RV_TIMER_INTR_ENABLE_REG_OFFSETS,
    RV_TIMER_INTR_TEST_REG_OFFSETS,
);

/// State or enable mask of every timer interrupt.
pub type RvTimerIrqSnapshot = IrqSnapshot<RV_TIMER_IRQ_BANKS>;

/// Timer interrupt lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u32)]
pub enum RvTimerIrq {
    /// Hart 0, timer 0 reached its compare value.
    TimerExpiredHart0Timer0 = 0,
}

impl RvTimerIrq {
    pub const ALL: [RvTimerIrq; RV_TIMER_PARAM_N_IRQS as usize] =
        [RvTimerIrq::TimerExpiredHart0Timer0];
}

impl From<RvTimerIrq> for IrqId {
    fn from(irq: RvTimerIrq) -> Self {
        IrqId(irq as u32)
    }
}

impl TryFrom<u32> for RvTimerIrq {
    type Error = IrqError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RvTimerIrq::TimerExpiredHart0Timer0),
            _ => Err(IrqError::BadArgument),
        }
    }
}

/// Timer alerts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RvTimerAlert {
    FatalFault,
}

impl RvTimerAlert {
    fn bit(self) -> u32 {
        match self {
            RvTimerAlert::FatalFault => RV_TIMER_ALERT_TEST_FATAL_FAULT_BIT,
        }
    }
}

/// RISC-V timer instance.
#[derive(Debug)]
pub struct RvTimer<M: Mmio = MmioRegion> {
    irq: Irq<M, RV_TIMER_IRQ_BANKS>,
}

impl RvTimer<MmioRegion> {
    /// Bind a timer instance at `base`.
    ///
    /// Fails with [`IrqError::BadArgument`] for a null base address.
    ///
    /// # Safety
    ///
    /// - `base` must point to a RISC-V timer register block
    /// - Memory must be properly mapped as device memory
    pub unsafe fn new(base: usize) -> IrqResult<Self> {
        let mmio = unsafe { MmioRegion::new(base) }.ok_or(IrqError::BadArgument)?;
        Ok(Self::from_mmio(mmio))
    }
}

impl<M: Mmio> RvTimer<M> {
    /// Wrap an existing register region.
    pub fn from_mmio(mmio: M) -> Self {
        Self {
            irq: Irq::new(mmio, &RV_TIMER_IRQ_LAYOUT),
        }
    }

    /// Interrupt registers.
    pub fn irq(&self) -> &Irq<M, RV_TIMER_IRQ_BANKS> {
        &self.irq
    }

    pub fn irq_mut(&mut self) -> &mut Irq<M, RV_TIMER_IRQ_BANKS> {
        &mut self.irq
    }

    /// Raise `alert` through the alert test register.
    pub fn alert_force(&mut self, alert: RvTimerAlert) {
        debug!("rv_timer force alert {:?}", alert);
        self.irq
            .mmio_mut()
            .write32(RV_TIMER_ALERT_TEST_REG_OFFSET, 1 << alert.bit());
    }
}

// ============================================================================
// HAL Implementation
// ============================================================================

impl<M: Mmio> InterruptController for RvTimer<M> {
    type Error = IrqError;

    fn enable(&mut self, irq: IrqNumber) -> Result<(), Self::Error> {
        self.irq.set_enabled(irq, Toggle::Enabled)
    }

    fn disable(&mut self, irq: IrqNumber) -> Result<(), Self::Error> {
        self.irq.set_enabled(irq, Toggle::Disabled)
    }

    fn is_pending(&self, irq: IrqNumber) -> Result<bool, Self::Error> {
        self.irq.is_pending(irq)
    }

    fn next_pending(&self) -> Option<IrqNumber> {
        self.irq.get_state_all().first_set().map(|irq| irq.0)
    }

    fn clear(&mut self, irq: IrqNumber) -> Result<(), Self::Error> {
        self.irq.acknowledge(irq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::rv_timer::{
        RV_TIMER_INTR_ENABLE0_REG_OFFSET, RV_TIMER_INTR_STATE0_REG_OFFSET,
        RV_TIMER_INTR_TEST0_REG_OFFSET,
    };
    use crate::peripheral::irq::IrqType;
    use common::mmio::MockMmio;
    use mockall::Sequence;
    use mockall::predicate::eq;

    const IRQ: RvTimerIrq = RvTimerIrq::TimerExpiredHart0Timer0;

    // All interrupt registers are 32 bits wide, so line 32 is never valid.
    const BAD_IRQ: IrqId = IrqId(32);

    fn timer(mmio: MockMmio) -> RvTimer<MockMmio> {
        RvTimer::from_mmio(mmio)
    }

    #[test]
    fn null_base_is_rejected() {
        assert_eq!(unsafe { RvTimer::new(0) }.err(), Some(IrqError::BadArgument));
    }

    #[test]
    fn raw_values_outside_the_enum_are_rejected() {
        assert_eq!(RvTimerIrq::try_from(0u32), Ok(IRQ));
        assert_eq!(RvTimerIrq::try_from(1u32), Err(IrqError::BadArgument));
        assert_eq!(RvTimerIrq::try_from(32u32), Err(IrqError::BadArgument));
        assert_eq!(IrqId::from(IRQ), IrqId(0));
    }

    #[test]
    fn get_state_all_raised() {
        let mut mmio = MockMmio::new();
        mmio.expect_read32()
            .with(eq(RV_TIMER_INTR_STATE0_REG_OFFSET))
            .times(1)
            .return_const(u32::MAX);

        assert_eq!(timer(mmio).irq().get_state(0), Ok(u32::MAX));
    }

    #[test]
    fn get_state_none_raised() {
        let mut mmio = MockMmio::new();
        mmio.expect_read32()
            .with(eq(RV_TIMER_INTR_STATE0_REG_OFFSET))
            .times(1)
            .return_const(0u32);

        assert_eq!(timer(mmio).irq().get_state(0), Ok(0));
    }

    #[test]
    fn get_state_bad_bank() {
        assert_eq!(
            timer(MockMmio::new()).irq().get_state(1),
            Err(IrqError::BadArgument)
        );
    }

    #[test]
    fn is_pending() {
        let mut mmio = MockMmio::new();
        mmio.expect_read32()
            .with(eq(RV_TIMER_INTR_STATE0_REG_OFFSET))
            .times(2)
            .return_const(0x1u32);
        let timer = timer(mmio);

        assert_eq!(timer.irq().is_pending(IRQ), Ok(true));
        assert_eq!(InterruptController::is_pending(&timer, 0), Ok(true));
    }

    #[test]
    fn is_pending_bad_irq() {
        let timer = timer(MockMmio::new());

        assert_eq!(timer.irq().is_pending(BAD_IRQ), Err(IrqError::BadArgument));
        assert_eq!(
            InterruptController::is_pending(&timer, 1),
            Err(IrqError::BadArgument)
        );
    }

    #[test]
    fn acknowledge_is_a_plain_write() {
        let mut mmio = MockMmio::new();
        mmio.expect_write32()
            .with(eq(RV_TIMER_INTR_STATE0_REG_OFFSET), eq(0x1))
            .times(1)
            .return_const(());
        let mut timer = timer(mmio);

        assert_eq!(timer.irq_mut().acknowledge(IRQ), Ok(()));
    }

    #[test]
    fn acknowledge_bad_irq() {
        let mut timer = timer(MockMmio::new());

        assert_eq!(timer.irq_mut().acknowledge(BAD_IRQ), Err(IrqError::BadArgument));
        assert_eq!(timer.clear(32), Err(IrqError::BadArgument));
    }

    #[test]
    fn force() {
        let mut mmio = MockMmio::new();
        mmio.expect_write32()
            .with(eq(RV_TIMER_INTR_TEST0_REG_OFFSET), eq(0x1))
            .times(1)
            .return_const(());
        let mut timer = timer(mmio);

        assert_eq!(timer.irq_mut().force(IRQ), Ok(()));
    }

    #[test]
    fn force_bad_irq() {
        let mut timer = timer(MockMmio::new());

        assert_eq!(timer.irq_mut().force(BAD_IRQ), Err(IrqError::BadArgument));
    }

    #[test]
    fn get_enabled() {
        let mut mmio = MockMmio::new();
        mmio.expect_read32()
            .with(eq(RV_TIMER_INTR_ENABLE0_REG_OFFSET))
            .times(1)
            .return_const(0x1u32);

        assert_eq!(timer(mmio).irq().get_enabled(IRQ), Ok(Toggle::Enabled));
    }

    #[test]
    fn get_enabled_bad_irq() {
        assert_eq!(
            timer(MockMmio::new()).irq().get_enabled(BAD_IRQ),
            Err(IrqError::BadArgument)
        );
    }

    #[test]
    fn set_enabled_masks_bit_zero() {
        let mut seq = Sequence::new();
        let mut mmio = MockMmio::new();
        mmio.expect_read_modify_write32()
            .with(eq(RV_TIMER_INTR_ENABLE0_REG_OFFSET), eq(0x1), eq(0x1))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        mmio.expect_read_modify_write32()
            .with(eq(RV_TIMER_INTR_ENABLE0_REG_OFFSET), eq(0x1), eq(0x0))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let mut timer = timer(mmio);

        assert_eq!(timer.irq_mut().set_enabled(IRQ, Toggle::Enabled), Ok(()));
        assert_eq!(timer.disable(0), Ok(()));
    }

    #[test]
    fn set_enabled_bad_irq() {
        let mut timer = timer(MockMmio::new());

        assert_eq!(
            timer.irq_mut().set_enabled(BAD_IRQ, Toggle::Enabled),
            Err(IrqError::BadArgument)
        );
        assert_eq!(timer.enable(32), Err(IrqError::BadArgument));
    }

    #[test]
    fn disable_all_no_snapshot() {
        let mut mmio = MockMmio::new();
        mmio.expect_write32()
            .with(eq(RV_TIMER_INTR_ENABLE0_REG_OFFSET), eq(0))
            .times(1)
            .return_const(());

        timer(mmio).irq_mut().disable_all(None);
    }

    #[test]
    fn disable_all_snapshot_all_disabled() {
        let mut seq = Sequence::new();
        let mut mmio = MockMmio::new();
        mmio.expect_read32()
            .with(eq(RV_TIMER_INTR_ENABLE0_REG_OFFSET))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(0u32);
        mmio.expect_write32()
            .with(eq(RV_TIMER_INTR_ENABLE0_REG_OFFSET), eq(0))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut snapshot = RvTimerIrqSnapshot::new(RV_TIMER_PARAM_N_IRQS);
        timer(mmio).irq_mut().disable_all(Some(&mut snapshot));
        assert_eq!(snapshot.word(0), 0);
    }

    #[test]
    fn disable_all_snapshot_all_enabled() {
        let mut seq = Sequence::new();
        let mut mmio = MockMmio::new();
        mmio.expect_read32()
            .with(eq(RV_TIMER_INTR_ENABLE0_REG_OFFSET))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(u32::MAX);
        mmio.expect_write32()
            .with(eq(RV_TIMER_INTR_ENABLE0_REG_OFFSET), eq(0))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut snapshot = RvTimerIrqSnapshot::new(RV_TIMER_PARAM_N_IRQS);
        timer(mmio).irq_mut().disable_all(Some(&mut snapshot));
        assert_eq!(snapshot.word(0), u32::MAX);
    }

    #[test]
    fn restore_all_enabled() {
        let mut mmio = MockMmio::new();
        mmio.expect_write32()
            .with(eq(RV_TIMER_INTR_ENABLE0_REG_OFFSET), eq(u32::MAX))
            .times(1)
            .return_const(());

        let snapshot = RvTimerIrqSnapshot::pack([u32::MAX], RV_TIMER_PARAM_N_IRQS);
        assert_eq!(timer(mmio).irq_mut().restore_all(&snapshot), Ok(()));
    }

    #[test]
    fn restore_all_disabled() {
        let mut mmio = MockMmio::new();
        mmio.expect_write32()
            .with(eq(RV_TIMER_INTR_ENABLE0_REG_OFFSET), eq(0))
            .times(1)
            .return_const(());

        let snapshot = RvTimerIrqSnapshot::new(RV_TIMER_PARAM_N_IRQS);
        assert_eq!(timer(mmio).irq_mut().restore_all(&snapshot), Ok(()));
    }

    #[test]
    fn every_line_is_an_event() {
        let timer = timer(MockMmio::new());
        for irq in RvTimerIrq::ALL {
            assert_eq!(timer.irq().get_type(irq), Ok(IrqType::Event));
        }
    }

    #[test]
    fn next_pending_ignores_padding() {
        let mut mmio = MockMmio::new();
        mmio.expect_read32()
            .with(eq(RV_TIMER_INTR_STATE0_REG_OFFSET))
            .times(2)
            .returning({
                let mut values = [0x1u32, 0xffff_fffe].into_iter();
                move |_| values.next().unwrap_or(0)
            });
        let timer = timer(mmio);

        assert_eq!(timer.next_pending(), Some(0));
        assert_eq!(timer.next_pending(), None);
    }

    #[test]
    fn alert_force_writes_alert_test() {
        let mut mmio = MockMmio::new();
        mmio.expect_write32()
            .with(eq(RV_TIMER_ALERT_TEST_REG_OFFSET), eq(0x1))
            .times(1)
            .return_const(());

        timer(mmio).alert_force(RvTimerAlert::FatalFault);
    }
}
