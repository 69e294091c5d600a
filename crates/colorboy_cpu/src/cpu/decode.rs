use std::fmt;

use lazy_static::lazy_static;

/// Opcode that selects the secondary (prefixed) table.
pub const PREFIX_CB: u8 = 0xCB;

/// 8-bit operand slot in standard opcode order:
/// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    HlMem,
    A,
}

impl Reg8 {
    fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Reg8::B,
            1 => Reg8::C,
            2 => Reg8::D,
            3 => Reg8::E,
            4 => Reg8::H,
            5 => Reg8::L,
            6 => Reg8::HlMem,
            _ => Reg8::A,
        }
    }
}

/// 16-bit operand in `rp` order: 0=BC, 1=DE, 2=HL, 3=SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
}

impl Reg16 {
    fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Reg16::BC,
            1 => Reg16::DE,
            2 => Reg16::HL,
            _ => Reg16::SP,
        }
    }
}

/// Address source of the accumulator transfers at 0x02/0x0A and friends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indirect {
    BC,
    DE,
    HlInc,
    HlDec,
}

impl Indirect {
    fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Indirect::BC,
            1 => Indirect::DE,
            2 => Indirect::HlInc,
            _ => Indirect::HlDec,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cond {
    NZ,
    Z,
    NC,
    C,
}

impl Cond {
    fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Cond::NZ,
            1 => Cond::Z,
            2 => Cond::NC,
            _ => Cond::C,
        }
    }
}

/// A decoded instruction. Dispatch tables map opcode values to these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    Nop,
    Stop,
    LdR16D16(Reg16),
    LdIndirectA(Indirect),
    LdAIndirect(Indirect),
    IncR16(Reg16),
    DecR16(Reg16),
    IncR8(Reg8),
    DecR8(Reg8),
    LdR8D8(Reg8),
    Rlca,
    Rrca,
    Rla,
    Rra,
    LdA16Sp,
    AddHlR16(Reg16),
    Jr,
    JrCond(Cond),
    Daa,
    Cpl,
    Scf,
    Ccf,
}

impl Instruction {
    /// Encoded length in bytes, opcode included.
    pub fn length(self) -> u16 {
        match self {
            Instruction::LdR16D16(_) | Instruction::LdA16Sp => 3,
            Instruction::Stop
            | Instruction::LdR8D8(_)
            | Instruction::Jr
            | Instruction::JrCond(_) => 2,
            _ => 1,
        }
    }
}

lazy_static! {
    static ref BASE_TABLE: [Option<Instruction>; 256] = build_table(decode_base);
    static ref CB_TABLE: [Option<Instruction>; 256] = build_table(decode_cb);
}

fn build_table(decode: fn(u8) -> Option<Instruction>) -> [Option<Instruction>; 256] {
    let mut table = [None; 256];
    for (opcode, slot) in table.iter_mut().enumerate() {
        *slot = decode(opcode as u8);
    }
    table
}

/// Look up an unprefixed opcode.
#[inline]
pub fn lookup(opcode: u8) -> Option<Instruction> {
    BASE_TABLE[opcode as usize]
}

/// Look up the byte that follows a `0xCB` prefix.
#[inline]
pub fn lookup_prefixed(opcode: u8) -> Option<Instruction> {
    CB_TABLE[opcode as usize]
}

fn decode_base(opcode: u8) -> Option<Instruction> {
    use Instruction::*;

    let y = (opcode >> 3) & 0x07;
    let p = (opcode >> 4) & 0x03;

    let instr = match opcode {
        0x00 => Nop,
        0x08 => LdA16Sp,
        0x10 => Stop,
        0x18 => Jr,
        0x20 | 0x28 | 0x30 | 0x38 => JrCond(Cond::from_index(y)),

        0x01 | 0x11 | 0x21 | 0x31 => LdR16D16(Reg16::from_index(p)),
        0x09 | 0x19 | 0x29 | 0x39 => AddHlR16(Reg16::from_index(p)),
        0x02 | 0x12 | 0x22 | 0x32 => LdIndirectA(Indirect::from_index(p)),
        0x0A | 0x1A | 0x2A | 0x3A => LdAIndirect(Indirect::from_index(p)),
        0x03 | 0x13 | 0x23 | 0x33 => IncR16(Reg16::from_index(p)),
        0x0B | 0x1B | 0x2B | 0x3B => DecR16(Reg16::from_index(p)),

        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => IncR8(Reg8::from_index(y)),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => DecR8(Reg8::from_index(y)),
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => LdR8D8(Reg8::from_index(y)),

        0x07 => Rlca,
        0x0F => Rrca,
        0x17 => Rla,
        0x1F => Rra,

        0x27 => Daa,
        0x2F => Cpl,
        0x37 => Scf,
        0x3F => Ccf,

        _ => return None,
    };
    Some(instr)
}

/// No prefixed (bit/shift/rotate on any register) instruction is wired in yet.
fn decode_cb(_opcode: u8) -> Option<Instruction> {
    None
}

impl fmt::Display for Reg8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg8::B => "B",
            Reg8::C => "C",
            Reg8::D => "D",
            Reg8::E => "E",
            Reg8::H => "H",
            Reg8::L => "L",
            Reg8::HlMem => "(HL)",
            Reg8::A => "A",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Reg16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg16::BC => "BC",
            Reg16::DE => "DE",
            Reg16::HL => "HL",
            Reg16::SP => "SP",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Indirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indirect::BC => "(BC)",
            Indirect::DE => "(DE)",
            Indirect::HlInc => "(HL+)",
            Indirect::HlDec => "(HL-)",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cond::NZ => "NZ",
            Cond::Z => "Z",
            Cond::NC => "NC",
            Cond::C => "C",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Nop => f.write_str("NOP"),
            Instruction::Stop => f.write_str("STOP"),
            Instruction::LdR16D16(rr) => write!(f, "LD {rr},d16"),
            Instruction::LdIndirectA(src) => write!(f, "LD {src},A"),
            Instruction::LdAIndirect(src) => write!(f, "LD A,{src}"),
            Instruction::IncR16(rr) => write!(f, "INC {rr}"),
            Instruction::DecR16(rr) => write!(f, "DEC {rr}"),
            Instruction::IncR8(r) => write!(f, "INC {r}"),
            Instruction::DecR8(r) => write!(f, "DEC {r}"),
            Instruction::LdR8D8(r) => write!(f, "LD {r},d8"),
            Instruction::Rlca => f.write_str("RLCA"),
            Instruction::Rrca => f.write_str("RRCA"),
            Instruction::Rla => f.write_str("RLA"),
            Instruction::Rra => f.write_str("RRA"),
            Instruction::LdA16Sp => f.write_str("LD (a16),SP"),
            Instruction::AddHlR16(rr) => write!(f, "ADD HL,{rr}"),
            Instruction::Jr => f.write_str("JR r8"),
            Instruction::JrCond(cc) => write!(f, "JR {cc},r8"),
            Instruction::Daa => f.write_str("DAA"),
            Instruction::Cpl => f.write_str("CPL"),
            Instruction::Scf => f.write_str("SCF"),
            Instruction::Ccf => f.write_str("CCF"),
        }
    }
}
