//! English Breakfast top (reduced Earl Grey for FPGA bring-up).

pub const NAME: &str = "English Breakfast";

pub const RV_TIMER_BASE_ADDR: usize = 0x4010_0000;
