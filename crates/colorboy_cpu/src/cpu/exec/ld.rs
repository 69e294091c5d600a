use crate::cpu::decode::{Indirect, Reg16, Reg8};
use crate::cpu::{Bus, Cpu};
use crate::error::Result;
use crate::pacer::Pacer;

impl<'a, B: Bus, P: Pacer> Cpu<'a, B, P> {
    pub(super) fn exec_ld_rr_d16(&mut self, reg: Reg16) -> Result<u32> {
        let value = self.fetch_d16()?;
        self.write_reg16(reg, value);
        Ok(12)
    }

    pub(super) fn exec_ld_r_d8(&mut self, reg: Reg8) -> Result<u32> {
        let value = self.fetch_d8()?;
        self.write_reg8(reg, value)?;

        Ok(if reg == Reg8::HlMem { 12 } else { 8 })
    }

    /// LD (a16),SP. Two separate bus writes, low byte first. When the bus
    /// rejects the second one the low byte stays written; registers and PC
    /// are left as they were.
    pub(super) fn exec_ld_a16_sp(&mut self) -> Result<u32> {
        let addr = self.fetch_d16()?;
        let [hi, lo] = self.regs.sp.to_be_bytes();
        self.bus_write(addr, lo)?;
        self.bus_write(addr.wrapping_add(1), hi)?;
        Ok(20)
    }

    pub(super) fn exec_ld_indirect_a(&mut self, dst: Indirect) -> Result<u32> {
        let addr = self.indirect_addr(dst);
        self.bus_write(addr, self.regs.a)?;
        self.indirect_post(dst);
        Ok(8)
    }

    pub(super) fn exec_ld_a_indirect(&mut self, src: Indirect) -> Result<u32> {
        let addr = self.indirect_addr(src);
        self.regs.a = self.bus_read(addr)?;
        self.indirect_post(src);
        Ok(8)
    }
}
