use crate::cpu::decode::Cond;
use crate::cpu::{Bus, Cpu};
use crate::error::Result;
use crate::pacer::Pacer;

impl<'a, B: Bus, P: Pacer> Cpu<'a, B, P> {
    /// JR r8 / JR cc,r8.
    ///
    /// The displacement is a signed byte added to the address of the JR
    /// opcode itself. When the condition fails PC only moves past the `len`
    /// bytes of the instruction.
    pub(super) fn exec_jr(&mut self, cond: Option<Cond>, len: u16) -> Result<u32> {
        let offset = self.fetch_d8()? as i8;
        let taken = cond.map_or(true, |cc| self.condition(cc));

        if taken {
            self.regs.pc = self.regs.pc.wrapping_add_signed(i16::from(offset));
            Ok(12)
        } else {
            self.advance_pc(len);
            Ok(8)
        }
    }
}
