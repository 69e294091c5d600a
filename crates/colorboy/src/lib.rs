use anyhow::{Context, Result};
use colorboy_cartridge::Cartridge;
use colorboy_cpu::{
    Bus, Cpu, CpuConfig, DetachedBus, FlatBus, NoPacer, Pacer, Registers, RunSummary, SleepPacer,
};

/// How a ROM image is handed to the execution engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Feed only the bytes after the header, starting at index 0.
    pub skip_header: bool,
    /// Entry point into the full image. Ignored with `skip_header`.
    pub entry_point: u16,
    /// Throttle to the CGB double-speed clock.
    pub realtime: bool,
    pub max_steps: Option<u64>,
    /// Run without any bus behind the engine.
    pub detached_bus: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            skip_header: false,
            entry_point: 0x0100,
            realtime: false,
            max_steps: None,
            detached_bus: false,
        }
    }
}

/// Final engine state after a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub summary: RunSummary,
    pub registers: Registers,
}

pub fn run_rom(rom: Vec<u8>, options: &RunOptions) -> Result<RunReport> {
    let cartridge = Cartridge::from_bytes(rom).context("Failed to parse cartridge")?;
    log::info!("Loaded {}", cartridge.header());
    if !cartridge.header_checksum_valid() {
        log::warn!("Header checksum mismatch");
    }
    if !cartridge.global_checksum_valid() {
        log::warn!("Global checksum mismatch");
    }

    let (program, entry_point) = if options.skip_header {
        (cartridge.game_data(), 0x0000)
    } else {
        (cartridge.rom_window(), options.entry_point)
    };
    let config = CpuConfig::builder().entry_point(entry_point).build();

    let pacer: Box<dyn Pacer> = if options.realtime {
        Box::new(SleepPacer::builder().build())
    } else {
        Box::new(NoPacer)
    };

    if options.detached_bus {
        execute(program, DetachedBus, pacer, config, options.max_steps)
    } else {
        execute(
            program,
            FlatBus::with_rom(program),
            pacer,
            config,
            options.max_steps,
        )
    }
}

fn execute<B: Bus>(
    program: &[u8],
    bus: B,
    pacer: Box<dyn Pacer>,
    config: CpuConfig,
    max_steps: Option<u64>,
) -> Result<RunReport> {
    let mut cpu = Cpu::new(program, bus, pacer, config).context("Failed to start the CPU")?;

    let summary = match max_steps {
        Some(steps) => cpu.run_for(steps),
        None => cpu.run(),
    }
    .with_context(|| {
        format!(
            "Execution aborted after {} cycles at PC=0x{:04X}",
            cpu.cycles(),
            cpu.pc()
        )
    })?;

    Ok(RunReport {
        summary,
        registers: *cpu.registers(),
    })
}
