use crate::error::{CpuError, Result};
use crate::pacer::Pacer;

use super::decode::{lookup, lookup_prefixed, PREFIX_CB};
use super::{Bus, Cpu, Instruction, RunSummary, State};

impl<'a, B: Bus, P: Pacer> Cpu<'a, B, P> {
    /// Execute a single instruction and return the number of cycles taken.
    ///
    /// Once the engine is stopped this returns 0 without touching anything.
    /// On error no register has been modified by the failing instruction.
    pub fn step(&mut self) -> Result<u32> {
        if self.state == State::Stopped {
            return Ok(0);
        }

        let pc = self.regs.pc;
        let instr = self.decode()?;
        let cycles = self.execute(instr)?;
        log::trace!("{pc:04X}: {instr} ({cycles} cycles)");

        self.tick(cycles);
        Ok(cycles)
    }

    /// Fetch the opcode at PC and map it through the dispatch tables.
    pub fn decode(&self) -> Result<Instruction> {
        let pc = self.regs.pc;
        let opcode = self.fetch_at(0)?;

        let (instr, opcode, prefixed) = if opcode == PREFIX_CB {
            let opcode = self.fetch_at(1)?;
            (lookup_prefixed(opcode), opcode, true)
        } else {
            (lookup(opcode), opcode, false)
        };

        instr.ok_or_else(|| {
            let err = CpuError::UnimplementedOpcode {
                opcode,
                prefixed,
                pc,
            };
            log::error!(
                "{err} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                sp = self.regs.sp,
                af = self.regs.af(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
            );
            err
        })
    }

    /// Charge `cycles` elapsed CPU cycles.
    ///
    /// The counter wraps at `u64::MAX`. Bus peripherals advance by the same
    /// amount and the pacer gets the chance to throttle.
    pub fn tick(&mut self, cycles: u32) {
        self.cycles = self.cycles.wrapping_add(u64::from(cycles));
        self.bus.tick(cycles);
        self.pacer.pace(cycles);
    }

    /// Run until STOP. Any error ends the loop and is returned.
    pub fn run(&mut self) -> Result<RunSummary> {
        self.run_for(u64::MAX)
    }

    /// Run until STOP or until `max_steps` instructions have executed.
    pub fn run_for(&mut self, max_steps: u64) -> Result<RunSummary> {
        let mut steps = 0;
        while self.state == State::Running && steps < max_steps {
            self.step()?;
            steps += 1;
        }

        if self.state == State::Running {
            log::debug!("step budget of {max_steps} spent at PC=0x{:04X}", self.regs.pc);
        }

        Ok(RunSummary {
            steps,
            cycles: self.cycles,
            state: self.state,
        })
    }
}
