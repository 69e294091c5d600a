use typed_builder::TypedBuilder;

use crate::error::{CpuError, Result};
use crate::pacer::{NoPacer, Pacer};
use crate::ADDRESS_SPACE;

use super::{Bus, Cpu, FlatBus, Registers, State};

/// Construction-time settings of the engine.
#[derive(TypedBuilder, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CpuConfig {
    /// Program index the first fetch happens at.
    #[builder(default = 0x0000)]
    pub entry_point: u16,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<'a> Cpu<'a, FlatBus, NoPacer> {
    /// Engine over `program` with the program mirrored into a flat bus, no
    /// pacing and the default entry point.
    pub fn with_program(program: &'a [u8]) -> Result<Self> {
        Cpu::new(
            program,
            FlatBus::with_rom(program),
            NoPacer,
            CpuConfig::default(),
        )
    }
}

impl<'a, B: Bus, P: Pacer> Cpu<'a, B, P> {
    /// Build an engine. Malformed programs are rejected here rather than on
    /// the first fetch.
    pub fn new(program: &'a [u8], bus: B, pacer: P, config: CpuConfig) -> Result<Self> {
        if program.is_empty() {
            return Err(CpuError::EmptyProgram);
        }
        if program.len() > ADDRESS_SPACE {
            return Err(CpuError::ProgramTooLarge { len: program.len() });
        }
        if usize::from(config.entry_point) >= program.len() {
            return Err(CpuError::EntryPointOutOfBounds {
                entry: config.entry_point,
                len: program.len(),
            });
        }

        log::debug!(
            "CPU init: {} program bytes, entry point 0x{:04X}",
            program.len(),
            config.entry_point
        );

        Ok(Self {
            regs: Registers {
                pc: config.entry_point,
                ..Registers::default()
            },
            program,
            bus,
            pacer,
            entry_point: config.entry_point,
            cycles: 0,
            pc_past_end: false,
            state: State::Running,
        })
    }

    /// Return to the power-on state: zeroed registers, PC at the entry
    /// point, cycle counter cleared, running.
    ///
    /// The bus is left as it is.
    pub fn reset(&mut self) {
        self.regs = Registers {
            pc: self.entry_point,
            ..Registers::default()
        };
        self.cycles = 0;
        self.pc_past_end = false;
        self.state = State::Running;
    }
}
