use thiserror::Error;

pub type Result<T> = std::result::Result<T, CpuError>;

/// Everything that can stop the execution engine.
///
/// None of these are transient: decoding runs over an immutable byte
/// sequence, so retrying the same step yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CpuError {
    #[error("program is empty")]
    EmptyProgram,
    #[error("program of {len} bytes does not fit the 16-bit address space")]
    ProgramTooLarge { len: usize },
    #[error("entry point {entry:#06x} lies outside the {len}-byte program")]
    EntryPointOutOfBounds { entry: u16, len: usize },
    #[error("fetch at {addr:#06x} past the end of the {len}-byte program")]
    OutOfBoundsFetch { addr: usize, len: usize },
    #[error("unimplemented opcode {} at PC={pc:#06x}", fmt_opcode(.opcode, .prefixed))]
    UnimplementedOpcode { opcode: u8, prefixed: bool, pc: u16 },
    #[error("no memory bus behind read of {addr:#06x} (PC={pc:#06x})")]
    UnresolvedMemoryRead { addr: u16, pc: u16 },
    #[error("no memory bus behind write to {addr:#06x} (PC={pc:#06x})")]
    UnresolvedMemoryWrite { addr: u16, pc: u16 },
}

fn fmt_opcode(opcode: &u8, prefixed: &bool) -> String {
    if *prefixed {
        format!("0xCB 0x{opcode:02X}")
    } else {
        format!("0x{opcode:02X}")
    }
}
