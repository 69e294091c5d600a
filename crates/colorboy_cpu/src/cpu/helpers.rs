use crate::error::{CpuError, Result};
use crate::pacer::Pacer;
use crate::ADDRESS_SPACE;

use super::decode::{Cond, Indirect, Reg16, Reg8};
use super::{Bus, BusError, Cpu, Flags};

impl<'a, B: Bus, P: Pacer> Cpu<'a, B, P> {
    /// Program byte at `PC + offset`.
    ///
    /// Reading past the end of the program is an error, never a wrap.
    #[inline]
    pub(super) fn fetch_at(&self, offset: u16) -> Result<u8> {
        let mut addr = usize::from(self.regs.pc) + usize::from(offset);
        if self.pc_past_end {
            addr += ADDRESS_SPACE;
        }
        self.program
            .get(addr)
            .copied()
            .ok_or(CpuError::OutOfBoundsFetch {
                addr,
                len: self.program.len(),
            })
    }

    /// 8-bit immediate operand following the opcode.
    #[inline]
    pub(super) fn fetch_d8(&self) -> Result<u8> {
        self.fetch_at(1)
    }

    /// 16-bit immediate operand following the opcode.
    ///
    /// Operand bytes are taken in source order: the first one is the high
    /// byte, the second one the low byte.
    #[inline]
    pub(super) fn fetch_d16(&self) -> Result<u16> {
        let hi = self.fetch_at(1)?;
        let lo = self.fetch_at(2)?;
        Ok(u16::from_be_bytes([hi, lo]))
    }

    /// Move PC past an instruction. Stepping over 0xFFFF leaves PC wrapped
    /// but marks it past the end, so execution cannot resume at 0x0000.
    #[inline]
    pub(super) fn advance_pc(&mut self, len: u16) {
        let (pc, overflowed) = self.regs.pc.overflowing_add(len);
        self.regs.pc = pc;
        self.pc_past_end = overflowed;
    }

    pub(super) fn bus_read(&mut self, addr: u16) -> Result<u8> {
        let pc = self.regs.pc;
        self.bus.read8(addr).map_err(|err| bus_fault(err, pc))
    }

    pub(super) fn bus_write(&mut self, addr: u16, value: u8) -> Result<()> {
        let pc = self.regs.pc;
        self.bus.write8(addr, value).map_err(|err| bus_fault(err, pc))
    }

    /// Read an 8-bit register, or the byte at (HL) through the bus.
    #[inline]
    pub(super) fn read_reg8(&mut self, reg: Reg8) -> Result<u8> {
        Ok(match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::HlMem => return self.bus_read(self.regs.hl()),
            Reg8::A => self.regs.a,
        })
    }

    /// Write an 8-bit register, or the byte at (HL) through the bus.
    #[inline]
    pub(super) fn write_reg8(&mut self, reg: Reg8, value: u8) -> Result<()> {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::HlMem => return self.bus_write(self.regs.hl(), value),
            Reg8::A => self.regs.a = value,
        }
        Ok(())
    }

    #[inline]
    pub(super) fn read_reg16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::BC => self.regs.bc(),
            Reg16::DE => self.regs.de(),
            Reg16::HL => self.regs.hl(),
            Reg16::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_reg16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::BC => self.regs.set_bc(value),
            Reg16::DE => self.regs.set_de(value),
            Reg16::HL => self.regs.set_hl(value),
            Reg16::SP => self.regs.sp = value,
        }
    }

    /// Address named by an accumulator-transfer operand.
    #[inline]
    pub(super) fn indirect_addr(&self, src: Indirect) -> u16 {
        match src {
            Indirect::BC => self.regs.bc(),
            Indirect::DE => self.regs.de(),
            Indirect::HlInc | Indirect::HlDec => self.regs.hl(),
        }
    }

    /// Post-transfer HL adjustment of `(HL+)` / `(HL-)`.
    #[inline]
    pub(super) fn indirect_post(&mut self, src: Indirect) {
        match src {
            Indirect::HlInc => self.regs.set_hl(self.regs.hl().wrapping_add(1)),
            Indirect::HlDec => self.regs.set_hl(self.regs.hl().wrapping_sub(1)),
            Indirect::BC | Indirect::DE => {}
        }
    }

    #[inline]
    pub(super) fn condition(&self, cc: Cond) -> bool {
        match cc {
            Cond::NZ => !self.regs.flag(Flags::Z),
            Cond::Z => self.regs.flag(Flags::Z),
            Cond::NC => !self.regs.flag(Flags::C),
            Cond::C => self.regs.flag(Flags::C),
        }
    }
}

fn bus_fault(err: BusError, pc: u16) -> CpuError {
    log::error!("bus fault at PC=0x{pc:04X}: {err}");
    match err {
        BusError::UnresolvedRead { addr } => CpuError::UnresolvedMemoryRead { addr, pc },
        BusError::UnresolvedWrite { addr, .. } => CpuError::UnresolvedMemoryWrite { addr, pc },
    }
}
