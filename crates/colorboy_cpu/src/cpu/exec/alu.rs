use crate::cpu::decode::Reg16;
use crate::cpu::{alu, Bus, Cpu, Flags};
use crate::pacer::Pacer;

impl<'a, B: Bus, P: Pacer> Cpu<'a, B, P> {
    /// RLCA/RRCA/RLA/RRA. `op` gets A and the incoming carry.
    pub(super) fn exec_rotate_a(&mut self, op: fn(u8, bool) -> (u8, Flags)) -> u32 {
        let (result, flags) = op(self.regs.a, self.regs.flag(Flags::C));
        self.regs.a = result;
        self.regs.f = flags;
        4
    }

    pub(super) fn exec_add_hl_rr(&mut self, reg: Reg16) -> u32 {
        let value = self.read_reg16(reg);
        let (result, flags) = alu::add16(self.regs.hl(), value);
        self.regs.set_hl(result);
        self.regs.f = flags;
        8
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        let (result, flags) = alu::daa(self.regs.a, self.regs.f);
        self.regs.a = result;
        self.regs.f = flags;
        4
    }

    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        self.regs.f.insert(Flags::N | Flags::H);
        4
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        self.regs.f.remove(Flags::N | Flags::H);
        self.regs.f.insert(Flags::C);
        4
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        self.regs.f.remove(Flags::N | Flags::H);
        self.regs.f.toggle(Flags::C);
        4
    }
}
