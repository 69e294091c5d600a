use thiserror::Error;

use crate::ADDRESS_SPACE;

/// Failure reported by a bus for a single access.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    #[error("nothing mapped for read at {addr:#06x}")]
    UnresolvedRead { addr: u16 },
    #[error("nothing mapped for write of {value:#04x} to {addr:#06x}")]
    UnresolvedWrite { addr: u16, value: u8 },
}

/// Abstraction over the data side of the address space.
///
/// Instruction and operand fetches come from the program the engine was
/// built with; every load and store instruction goes through this trait.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> Result<u8, BusError>;
    fn write8(&mut self, addr: u16, value: u8) -> Result<(), BusError>;

    /// Advance bus-side peripherals by a given number of CPU cycles.
    ///
    /// Default implementation does nothing; a system bus can override this
    /// to drive timers, video, audio, etc.
    fn tick(&mut self, _cycles: u32) {}
}

/// 64 KiB of flat, fully writable memory.
///
/// No banking and no memory-mapped IO. Good enough to observe every transfer
/// the instruction set performs.
#[derive(Clone)]
pub struct FlatBus {
    memory: Box<[u8]>,
}

impl Default for FlatBus {
    fn default() -> Self {
        Self {
            memory: vec![0; ADDRESS_SPACE].into_boxed_slice(),
        }
    }
}

impl std::fmt::Debug for FlatBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatBus")
            .field("size", &self.memory.len())
            .finish()
    }
}

impl FlatBus {
    /// Flat memory with `rom` mirrored from address 0. Bytes past the
    /// address space are ignored.
    pub fn with_rom(rom: &[u8]) -> Self {
        let mut bus = Self::default();
        let len = rom.len().min(ADDRESS_SPACE);
        bus.memory[..len].copy_from_slice(&rom[..len]);
        bus
    }

    pub fn memory(&self) -> &[u8] {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut [u8] {
        &mut self.memory
    }
}

impl Bus for FlatBus {
    #[inline]
    fn read8(&mut self, addr: u16) -> Result<u8, BusError> {
        Ok(self.memory[addr as usize])
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        self.memory[addr as usize] = value;
        Ok(())
    }
}

/// Stand-in for a core that has no memory system wired in yet.
///
/// Every access fails, so a computed address is never mistaken for a
/// completed transfer.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedBus;

impl Bus for DetachedBus {
    fn read8(&mut self, addr: u16) -> Result<u8, BusError> {
        Err(BusError::UnresolvedRead { addr })
    }

    fn write8(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        Err(BusError::UnresolvedWrite { addr, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_bus_mirrors_rom_and_accepts_writes() {
        let mut bus = FlatBus::with_rom(&[0x3E, 0x42]);
        assert_eq!(bus.read8(0x0000), Ok(0x3E));
        assert_eq!(bus.read8(0x0001), Ok(0x42));
        assert_eq!(bus.read8(0x0002), Ok(0x00));

        bus.write8(0xFFFF, 0x99).unwrap();
        assert_eq!(bus.read8(0xFFFF), Ok(0x99));
        assert_eq!(bus.memory().len(), ADDRESS_SPACE);
    }

    #[test]
    fn flat_bus_truncates_oversized_rom() {
        let rom = vec![0xAA; ADDRESS_SPACE + 16];
        let bus = FlatBus::with_rom(&rom);
        assert_eq!(bus.memory().len(), ADDRESS_SPACE);
        assert!(bus.memory().iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn detached_bus_rejects_everything() {
        let mut bus = DetachedBus;
        assert_eq!(
            bus.read8(0xC000),
            Err(BusError::UnresolvedRead { addr: 0xC000 })
        );
        assert_eq!(
            bus.write8(0xC000, 0x12),
            Err(BusError::UnresolvedWrite {
                addr: 0xC000,
                value: 0x12
            })
        );
    }
}
