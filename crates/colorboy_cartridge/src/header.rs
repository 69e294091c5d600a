use std::fmt;

/// CGB compatibility byte at 0x0143.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CgbSupport {
    /// Monochrome-only title.
    None,
    /// Runs on both, with colour enhancements.
    Enhanced,
    Only,
}

impl CgbSupport {
    pub fn from_code(code: u8) -> Self {
        match code {
            0x80 => CgbSupport::Enhanced,
            0xC0 => CgbSupport::Only,
            _ => CgbSupport::None,
        }
    }
}

/// Mapper family announced at 0x0147.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartridgeType {
    RomOnly,
    Mbc1,
    Mbc2,
    Mmm01,
    Mbc3,
    Mbc5,
    Mbc6,
    Mbc7,
    PocketCamera,
    Tama5,
    HuC3,
    HuC1,
    Unknown(u8),
}

impl CartridgeType {
    pub fn from_code(code: u8) -> Self {
        match code {
            0x00 | 0x08 | 0x09 => CartridgeType::RomOnly,
            0x01..=0x03 => CartridgeType::Mbc1,
            0x05 | 0x06 => CartridgeType::Mbc2,
            0x0B..=0x0D => CartridgeType::Mmm01,
            0x0F..=0x13 => CartridgeType::Mbc3,
            0x19..=0x1E => CartridgeType::Mbc5,
            0x20 => CartridgeType::Mbc6,
            0x22 => CartridgeType::Mbc7,
            0xFC => CartridgeType::PocketCamera,
            0xFD => CartridgeType::Tama5,
            0xFE => CartridgeType::HuC3,
            0xFF => CartridgeType::HuC1,
            other => CartridgeType::Unknown(other),
        }
    }
}

/// Decoded cartridge header (0x0100..0x0150).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartridgeHeader {
    /// Usually `NOP; JP a16`.
    pub entry: [u8; 4],
    pub logo: [u8; 48],
    pub title: String,
    pub manufacturer_code: [u8; 4],
    pub cgb: CgbSupport,
    pub new_licensee_code: [u8; 2],
    pub sgb: bool,
    pub cartridge_type: CartridgeType,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
    /// 0x00 for Japan, anything else overseas.
    pub destination_code: u8,
    pub old_licensee_code: u8,
    pub mask_rom_version: u8,
    pub header_checksum: u8,
    pub global_checksum: u16,
}

impl CartridgeHeader {
    /// Decode the header fields. `rom` must be at least 0x150 bytes long.
    pub(crate) fn parse(rom: &[u8]) -> Self {
        let title = rom[0x0134..0x0144]
            .split(|&b| b == 0)
            .next()
            .map(|t| String::from_utf8_lossy(t).trim_end().to_string())
            .unwrap_or_default();

        Self {
            entry: bytes(rom, 0x0100),
            logo: bytes(rom, 0x0104),
            title,
            manufacturer_code: bytes(rom, 0x013F),
            cgb: CgbSupport::from_code(rom[0x0143]),
            new_licensee_code: bytes(rom, 0x0144),
            sgb: rom[0x0146] == 0x03,
            cartridge_type: CartridgeType::from_code(rom[0x0147]),
            rom_size_code: rom[0x0148],
            ram_size_code: rom[0x0149],
            destination_code: rom[0x014A],
            old_licensee_code: rom[0x014B],
            mask_rom_version: rom[0x014C],
            header_checksum: rom[0x014D],
            global_checksum: u16::from_be_bytes([rom[0x014E], rom[0x014F]]),
        }
    }

    /// Declared ROM size in bytes, `None` for an unknown code.
    pub fn rom_size_bytes(&self) -> Option<usize> {
        const BANK: usize = 16 * 1024;
        match self.rom_size_code {
            code @ 0x00..=0x08 => Some((32 * 1024) << code),
            0x52 => Some(72 * BANK),
            0x53 => Some(80 * BANK),
            0x54 => Some(96 * BANK),
            _ => None,
        }
    }

    /// External RAM size in bytes, 0 when absent or unknown.
    pub fn ram_size_bytes(&self) -> usize {
        match self.ram_size_code {
            0x01 => 2 * 1024,
            0x02 => 8 * 1024,
            0x03 => 32 * 1024,
            0x04 => 128 * 1024,
            0x05 => 64 * 1024,
            _ => 0,
        }
    }

    pub fn is_japanese(&self) -> bool {
        self.destination_code == 0x00
    }
}

impl fmt::Display for CartridgeHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:?}, ROM {} KiB, RAM {} KiB, CGB {:?}, SGB {}, v{})",
            self.title,
            self.cartridge_type,
            self.rom_size_bytes().unwrap_or(0) / 1024,
            self.ram_size_bytes() / 1024,
            self.cgb,
            self.sgb,
            self.mask_rom_version,
        )
    }
}

fn bytes<const N: usize>(rom: &[u8], start: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&rom[start..start + N]);
    out
}
