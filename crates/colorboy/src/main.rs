use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colorboy::RunOptions;

#[derive(Parser, Debug)]
#[command(name = "colorboy", about = "Run a Game Boy Color ROM on the SM83 core")]
struct Args {
    /// Path to ROM file
    rom: PathBuf,

    /// Entry point into the ROM image (hex or decimal)
    #[arg(long, value_name = "ADDR", default_value = "0x0100", value_parser = parse_addr)]
    entry: u16,

    /// Execute the bytes after the cartridge header, starting at index 0
    #[arg(long, conflicts_with = "entry")]
    skip_header: bool,

    /// Throttle execution to the CGB double-speed clock
    #[arg(long)]
    realtime: bool,

    /// Stop after this many instructions
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Run without a memory bus; every load and store fails
    #[arg(long)]
    detached_bus: bool,
}

fn parse_addr(s: &str) -> std::result::Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    log::info!("Playing ROM path: '{}'", args.rom.display());
    let rom = std::fs::read(&args.rom)
        .with_context(|| format!("Failed to read ROM file '{}'", args.rom.display()))?;

    let options = RunOptions {
        skip_header: args.skip_header,
        entry_point: args.entry,
        realtime: args.realtime,
        max_steps: args.max_steps,
        detached_bus: args.detached_bus,
    };
    let report = colorboy::run_rom(rom, &options)?;

    let summary = report.summary;
    let regs = report.registers;
    println!(
        "{:?} after {} steps, {} cycles",
        summary.state, summary.steps, summary.cycles
    );
    println!(
        "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X}",
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl(),
        regs.sp,
        regs.pc
    );
    Ok(())
}
