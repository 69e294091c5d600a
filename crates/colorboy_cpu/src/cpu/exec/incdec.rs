use crate::cpu::decode::{Reg16, Reg8};
use crate::cpu::{alu, Bus, Cpu};
use crate::error::Result;
use crate::pacer::Pacer;

impl<'a, B: Bus, P: Pacer> Cpu<'a, B, P> {
    pub(super) fn exec_inc8_reg(&mut self, reg: Reg8) -> Result<u32> {
        let value = self.read_reg8(reg)?;
        let (result, flags) = alu::inc8(value, self.regs.f);
        self.write_reg8(reg, result)?;
        self.regs.f = flags;

        Ok(if reg == Reg8::HlMem { 12 } else { 4 })
    }

    pub(super) fn exec_dec8_reg(&mut self, reg: Reg8) -> Result<u32> {
        let value = self.read_reg8(reg)?;
        let (result, flags) = alu::dec8(value, self.regs.f);
        self.write_reg8(reg, result)?;
        self.regs.f = flags;

        Ok(if reg == Reg8::HlMem { 12 } else { 4 })
    }

    pub(super) fn exec_inc16_rr(&mut self, reg: Reg16) -> u32 {
        let value = self.read_reg16(reg).wrapping_add(1);
        self.write_reg16(reg, value);
        8
    }

    pub(super) fn exec_dec16_rr(&mut self, reg: Reg16) -> u32 {
        let value = self.read_reg16(reg).wrapping_sub(1);
        self.write_reg16(reg, value);
        8
    }
}
