mod alu;
mod bus;
mod decode;
mod exec;
mod helpers;
mod init;
mod regs;
mod step;


pub use bus::{Bus, BusError, DetachedBus, FlatBus};
pub use decode::{lookup, lookup_prefixed, Cond, Indirect, Instruction, Reg16, Reg8, PREFIX_CB};
pub use init::CpuConfig;
pub use regs::{Flags, Pair, Registers};

use crate::pacer::NoPacer;

/// Macro-state of the engine. `Stopped` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Stopped,
}

/// Outcome of a `run`/`run_for` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions executed by this call.
    pub steps: u64,
    /// Value of the cycle counter when the call returned.
    pub cycles: u64,
    pub state: State,
}

/// SM83 execution engine.
///
/// Owns the register file and the cycle counter, borrows the program it
/// executes, and talks to the rest of the address space through `B`.
/// Real-time throttling is delegated to `P`.
pub struct Cpu<'a, B = bus::FlatBus, P = NoPacer> {
    regs: Registers,
    program: &'a [u8],
    bus: B,
    pacer: P,
    entry_point: u16,
    /// Elapsed CPU cycles. Wraps at `u64::MAX`.
    cycles: u64,
    /// PC ran off the top of the address space; the next fetch is at
    /// `0x10000 + pc` and always out of bounds.
    pc_past_end: bool,
    state: State,
}

impl<'a, B, P> Cpu<'a, B, P> {
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.state == State::Stopped
    }

    pub fn program(&self) -> &'a [u8] {
        self.program
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn flag(&self, flag: Flags) -> bool {
        self.regs.flag(flag)
    }
}
