//! Earl Grey top.

pub const NAME: &str = "Earl Grey";

pub const RV_TIMER_BASE_ADDR: usize = 0x4010_0000;
