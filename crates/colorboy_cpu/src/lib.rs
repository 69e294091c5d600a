pub mod cpu;
pub mod error;
pub mod pacer;

pub use cpu::{
    Bus, BusError, Cpu, CpuConfig, DetachedBus, Flags, FlatBus, Instruction, Pair, Registers,
    RunSummary, State,
};
pub use error::{CpuError, Result};
pub use pacer::{NoPacer, Pacer, SleepPacer};

/// CGB double-speed CPU clock in Hz.
pub const CGB_DOUBLE_SPEED_CLOCK_HZ: u32 = 8_388_608;
/// Size of the 16-bit address space.
pub const ADDRESS_SPACE: usize = 0x10000;
