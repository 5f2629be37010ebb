//! RISC-V timer register map.
//!
//! Generated from the peripheral's hardware description; offsets are in
//! bytes from the instance base address.

/// Number of harts served by one timer instance.
pub const RV_TIMER_PARAM_N_HARTS: u32 = 1;

/// Number of timers per hart.
pub const RV_TIMER_PARAM_N_TIMERS: u32 = 1;

/// Number of interrupt lines (one per timer per hart).
pub const RV_TIMER_PARAM_N_IRQS: u32 = RV_TIMER_PARAM_N_HARTS * RV_TIMER_PARAM_N_TIMERS;

/// Register width in bits.
pub const RV_TIMER_PARAM_REG_WIDTH: u32 = 32;

pub const RV_TIMER_ALERT_TEST_REG_OFFSET: usize = 0x0;
pub const RV_TIMER_ALERT_TEST_FATAL_FAULT_BIT: u32 = 0;

pub const RV_TIMER_CTRL_REG_OFFSET: usize = 0x4;
pub const RV_TIMER_CTRL_ACTIVE_0_BIT: u32 = 0;

pub const RV_TIMER_INTR_ENABLE0_REG_OFFSET: usize = 0x100;
pub const RV_TIMER_INTR_ENABLE0_IE_0_BIT: u32 = 0;

pub const RV_TIMER_INTR_STATE0_REG_OFFSET: usize = 0x104;
pub const RV_TIMER_INTR_STATE0_IS_0_BIT: u32 = 0;

pub const RV_TIMER_INTR_TEST0_REG_OFFSET: usize = 0x108;
pub const RV_TIMER_INTR_TEST0_T_0_BIT: u32 = 0;

pub const RV_TIMER_CFG0_REG_OFFSET: usize = 0x10c;
pub const RV_TIMER_TIMER_V_LOWER0_REG_OFFSET: usize = 0x110;
pub const RV_TIMER_TIMER_V_UPPER0_REG_OFFSET: usize = 0x114;
pub const RV_TIMER_COMPARE_LOWER0_0_REG_OFFSET: usize = 0x118;
pub const RV_TIMER_COMPARE_UPPER0_0_REG_OFFSET: usize = 0x11c;

/// Interrupt state registers, one per bank, ascending.
pub const RV_TIMER_INTR_STATE_REG_OFFSETS: [usize; 1] = [RV_TIMER_INTR_STATE0_REG_OFFSET];

/// Interrupt enable registers, one per bank, ascending.
pub const RV_TIMER_INTR_ENABLE_REG_OFFSETS: [usize; 1] = [RV_TIMER_INTR_ENABLE0_REG_OFFSET];

/// Interrupt test registers, one per bank, ascending.
pub const RV_TIMER_INTR_TEST_REG_OFFSETS: [usize; 1] = [RV_TIMER_INTR_TEST0_REG_OFFSET];
