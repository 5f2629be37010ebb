//! Platform Abstraction Layer
//!
//! This module binds the peripheral drivers to the base addresses of one
//! top-level chip design. The top is selected with a Cargo feature.
//!
//! Driver instances are kept behind a lock: the interrupt core itself does
//! no locking and assumes exclusive access for the duration of each call.
//!
//! # Usage
//!
//! ```no_run
//! use drivers::platform::{CurrentPlatform as Platform, Platform as PlatformTrait};
//!
//! unsafe { Platform::init_interrupts() }?;
//! Platform::enable_irq(0)?;
//! # Ok::<(), drivers::IrqError>(())
//! ```

use crate::hal::interrupt::{InterruptController, IrqError, IrqNumber, IrqResult};
use crate::peripheral::rv_timer::{RvTimer, RvTimerIrqSnapshot};
use log::debug;
use spin::Mutex;

/// Platform trait - implemented by each supported top.
pub trait Platform {
    /// Platform name for debugging
    fn name() -> &'static str;

    /// Bind the interrupt-capable peripherals and mask all their lines.
    ///
    /// # Safety
    /// The peripheral register blocks must be mapped.
    unsafe fn init_interrupts() -> IrqResult<()>;

    /// Enable (unmask) an IRQ line
    ///
    /// The line operations fail with `BadArgument` before `init_interrupts()`.
    fn enable_irq(irq: IrqNumber) -> IrqResult<()>;

    /// Disable (mask) an IRQ line
    fn disable_irq(irq: IrqNumber) -> IrqResult<()>;

    /// Acknowledge a pending IRQ line
    fn clear_irq(irq: IrqNumber) -> IrqResult<()>;

    /// Lowest-numbered pending IRQ, or `None` if nothing is pending or the
    /// platform is not initialized.
    fn next_pending_irq() -> Option<IrqNumber>;

    /// Run `f` with exclusive access to the timer.
    ///
    /// Returns `None` before `init_interrupts()`.
    fn with_rv_timer<R>(f: impl FnOnce(&mut RvTimer) -> R) -> Option<R>;
}

// Top selection based on Cargo features
cfg_if::cfg_if! {
    if #[cfg(feature = "earlgrey")] {
        mod earlgrey;
        use earlgrey as top;
    } else if #[cfg(feature = "english-breakfast")] {
        mod english_breakfast;
        use english_breakfast as top;
    } else {
        compile_error!(
            "No top selected!\n\
            Use: cargo build --features earlgrey\n\
            Or:  cargo build --features english-breakfast"
        );
    }
}

// Ensure only one top is selected
#[cfg(all(feature = "earlgrey", feature = "english-breakfast"))]
compile_error!("Multiple tops selected! Choose only one: earlgrey OR english-breakfast");

pub use top::RV_TIMER_BASE_ADDR;

/// Timer instance (private)
static RV_TIMER: Mutex<Option<RvTimer>> = Mutex::new(None);

fn install(mut timer: RvTimer) {
    timer.irq_mut().disable_all(None);
    *RV_TIMER.lock() = Some(timer);
}

pub struct CurrentPlatform;

impl Platform for CurrentPlatform {
    fn name() -> &'static str {
        top::NAME
    }

    unsafe fn init_interrupts() -> IrqResult<()> {
        debug!(
            "{}: rv_timer at {:#x}",
            Self::name(),
            top::RV_TIMER_BASE_ADDR
        );
        let timer = unsafe { RvTimer::new(top::RV_TIMER_BASE_ADDR) }?;
        install(timer);
        Ok(())
    }

    fn enable_irq(irq: IrqNumber) -> IrqResult<()> {
        Self::with_rv_timer(|timer| timer.enable(irq)).unwrap_or(Err(IrqError::BadArgument))
    }

    fn disable_irq(irq: IrqNumber) -> IrqResult<()> {
        Self::with_rv_timer(|timer| timer.disable(irq)).unwrap_or(Err(IrqError::BadArgument))
    }

    fn clear_irq(irq: IrqNumber) -> IrqResult<()> {
        Self::with_rv_timer(|timer| timer.clear(irq)).unwrap_or(Err(IrqError::BadArgument))
    }

    fn next_pending_irq() -> Option<IrqNumber> {
        Self::with_rv_timer(|timer| timer.next_pending()).flatten()
    }

    fn with_rv_timer<R>(f: impl FnOnce(&mut RvTimer) -> R) -> Option<R> {
        RV_TIMER.lock().as_mut().map(f)
    }
}

/// Run `f` with every timer interrupt masked, restoring the previous enable
/// mask afterwards.
///
/// The lock is held for the whole sequence, so no other context can change
/// the mask in between.
pub fn with_rv_timer_irqs_masked<R>(f: impl FnOnce(&mut RvTimer) -> R) -> Option<IrqResult<R>> {
    CurrentPlatform::with_rv_timer(|timer| {
        let mut saved = RvTimerIrqSnapshot::new(timer.irq().lines());
        timer.irq_mut().disable_all(Some(&mut saved));
        let result = f(timer);
        timer.irq_mut().restore_all(&saved).map(|()| result)
    })
}
