//! Game Boy (Color) cartridge images.
//!
//! Only the header is interpreted. Mapper behaviour is left to whoever owns
//! the bus.

mod header;


pub use header::{CartridgeHeader, CartridgeType, CgbSupport};

use thiserror::Error;

/// First byte past the header. Game data starts here.
pub const HEADER_END: usize = 0x0150;
/// ROM visible at 0x0000..0x8000 before any bank switching.
pub const ROM_WINDOW: usize = 0x8000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartridgeError {
    #[error("ROM is {len} bytes, too small to hold a cartridge header")]
    TooSmall { len: usize },
    #[error("unknown ROM size code {code:#04x}")]
    UnknownRomSize { code: u8 },
    #[error("header declares {declared} bytes of ROM but the image has {actual}")]
    RomSizeMismatch { declared: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, CartridgeError>;

/// A ROM image together with its parsed header.
#[derive(Clone, Debug)]
pub struct Cartridge {
    rom: Vec<u8>,
    header: CartridgeHeader,
}

impl Cartridge {
    pub fn from_bytes(rom: Vec<u8>) -> Result<Self> {
        if rom.len() < HEADER_END {
            return Err(CartridgeError::TooSmall { len: rom.len() });
        }

        let header = CartridgeHeader::parse(&rom);
        let declared = header
            .rom_size_bytes()
            .ok_or(CartridgeError::UnknownRomSize {
                code: header.rom_size_code,
            })?;
        if rom.len() < declared {
            return Err(CartridgeError::RomSizeMismatch {
                declared,
                actual: rom.len(),
            });
        }
        if rom.len() > declared {
            log::warn!(
                "image has {} trailing bytes past the declared {declared}-byte ROM",
                rom.len() - declared
            );
        }

        log::debug!(
            "cartridge '{}': {:?}, {} KiB ROM, {} KiB RAM, CGB {:?}",
            header.title,
            header.cartridge_type,
            declared / 1024,
            header.ram_size_bytes() / 1024,
            header.cgb,
        );

        Ok(Self { rom, header })
    }

    pub fn header(&self) -> &CartridgeHeader {
        &self.header
    }

    /// Whole image, index 0 being address 0x0000.
    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    /// Banks 0 and 1, the part of the image mapped at 0x0000 with no
    /// mapper involved.
    pub fn rom_window(&self) -> &[u8] {
        &self.rom[..self.rom.len().min(ROM_WINDOW)]
    }

    /// Bytes following the header inside the fixed ROM window, starting at
    /// 0x0150.
    pub fn game_data(&self) -> &[u8] {
        &self.rom_window()[HEADER_END..]
    }

    /// Checksum over 0x0134..=0x014C as computed by the boot ROM.
    pub fn header_checksum_valid(&self) -> bool {
        let computed = self.rom[0x0134..=0x014C]
            .iter()
            .fold(0u8, |acc, &b| acc.wrapping_sub(b).wrapping_sub(1));
        computed == self.header.header_checksum
    }

    /// 16-bit sum of every byte except the two checksum bytes themselves.
    pub fn global_checksum_valid(&self) -> bool {
        let computed = self
            .rom
            .iter()
            .enumerate()
            .filter(|(i, _)| !matches!(i, 0x014E | 0x014F))
            .fold(0u16, |acc, (_, &b)| acc.wrapping_add(u16::from(b)));
        computed == self.header.global_checksum
    }
}
