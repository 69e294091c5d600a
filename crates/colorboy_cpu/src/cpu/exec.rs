mod alu;
mod control;
mod incdec;
mod ld;
mod system;

use crate::error::Result;
use crate::pacer::Pacer;

use super::{Bus, Cpu, Instruction};

impl<'a, B: Bus, P: Pacer> Cpu<'a, B, P> {
    /// Execute one decoded instruction and return the number of cycles.
    ///
    /// Handlers fetch all of their operands before touching any state. PC
    /// moves past the encoding only once the handler succeeded; jumps set it
    /// themselves.
    pub(super) fn execute(&mut self, instr: Instruction) -> Result<u32> {
        let cycles = match instr {
            Instruction::Nop => self.exec_nop(),
            Instruction::Stop => self.exec_stop(),

            Instruction::LdR16D16(rr) => self.exec_ld_rr_d16(rr)?,
            Instruction::LdIndirectA(dst) => self.exec_ld_indirect_a(dst)?,
            Instruction::LdAIndirect(src) => self.exec_ld_a_indirect(src)?,
            Instruction::LdR8D8(r) => self.exec_ld_r_d8(r)?,
            Instruction::LdA16Sp => self.exec_ld_a16_sp()?,

            Instruction::IncR16(rr) => self.exec_inc16_rr(rr),
            Instruction::DecR16(rr) => self.exec_dec16_rr(rr),
            Instruction::IncR8(r) => self.exec_inc8_reg(r)?,
            Instruction::DecR8(r) => self.exec_dec8_reg(r)?,

            Instruction::AddHlR16(rr) => self.exec_add_hl_rr(rr),
            Instruction::Rlca => self.exec_rotate_a(|a, _| super::alu::rlca(a)),
            Instruction::Rrca => self.exec_rotate_a(|a, _| super::alu::rrca(a)),
            Instruction::Rla => self.exec_rotate_a(super::alu::rla),
            Instruction::Rra => self.exec_rotate_a(super::alu::rra),
            Instruction::Daa => self.exec_daa(),
            Instruction::Cpl => self.exec_cpl(),
            Instruction::Scf => self.exec_scf(),
            Instruction::Ccf => self.exec_ccf(),

            Instruction::Jr => return self.exec_jr(None, instr.length()),
            Instruction::JrCond(cc) => return self.exec_jr(Some(cc), instr.length()),
        };

        self.advance_pc(instr.length());
        Ok(cycles)
    }
}
