//! Bank-based interrupt core.
//!
//! Peripherals expose `N` interrupt lines through three kinds of 32-bit
//! registers (state, enable, test), each repeated over `ceil(N / 32)`
//! banks. This module maps line numbers to banks and bits ([`index`]),
//! describes where the banks live ([`layout`]), packs multi-bank masks
//! ([`snapshot`]) and performs the register accesses ([`device`]).
//!
//! The core holds no state besides the register region it was given.
//! Callers sharing one instance between contexts must serialize access
//! themselves; see [`crate::platform`].

pub mod device;
pub mod index;
pub mod layout;
pub mod snapshot;

pub use device::Irq;
pub use index::{BANK_WIDTH, BitIndex, IrqId, bank_count};
pub use layout::{IrqLayout, IrqType};
pub use snapshot::IrqSnapshot;
