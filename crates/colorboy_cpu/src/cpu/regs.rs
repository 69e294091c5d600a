use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Only the upper nibble exists; bits 0–3 always read as zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// Result was zero.
        const Z = 0b1000_0000;
        /// Last operation was a subtraction.
        const N = 0b0100_0000;
        /// Carry out of bit 3 (8-bit) or bit 11 (16-bit).
        const H = 0b0010_0000;
        /// Carry out of bit 7 (8-bit) or bit 15 (16-bit).
        const C = 0b0001_0000;
    }
}

/// The three general-purpose pairs plus AF.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pair {
    AF,
    BC,
    DE,
    HL,
}

/// Register file of the SM83 core.
///
/// A passive container: the engine is the only writer. Every half is a `u8`
/// and SP/PC are `u16`, so widths can never be exceeded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f.bits()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.f = Flags::from_bits_truncate(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    /// The pair as `[high, low]`.
    pub fn pair_bytes(&self, pair: Pair) -> [u8; 2] {
        match pair {
            Pair::AF => [self.a, self.f.bits()],
            Pair::BC => [self.b, self.c],
            Pair::DE => [self.d, self.e],
            Pair::HL => [self.h, self.l],
        }
    }

    /// Store `[high, low]` into the pair. The low nibble of F is dropped.
    pub fn set_pair_bytes(&mut self, pair: Pair, [high, low]: [u8; 2]) {
        match pair {
            Pair::AF => {
                self.a = high;
                self.f = Flags::from_bits_truncate(low);
            }
            Pair::BC => (self.b, self.c) = (high, low),
            Pair::DE => (self.d, self.e) = (high, low),
            Pair::HL => (self.h, self.l) = (high, low),
        }
    }

    pub fn pair(&self, pair: Pair) -> u16 {
        u16::from_be_bytes(self.pair_bytes(pair))
    }

    pub fn set_pair(&mut self, pair: Pair, value: u16) {
        self.set_pair_bytes(pair, value.to_be_bytes());
    }

    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.f.contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.f.set(flag, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PAIRS: [Pair; 4] = [Pair::AF, Pair::BC, Pair::DE, Pair::HL];

    #[test]
    fn registers_start_zeroed() {
        let regs = Registers::default();
        for pair in PAIRS {
            assert_eq!(regs.pair_bytes(pair), [0, 0]);
        }
        assert_eq!(regs.sp, 0);
        assert_eq!(regs.pc, 0);
        assert!(regs.f.is_empty());
    }

    #[test]
    fn f_low_nibble_is_always_clear() {
        let mut regs = Registers::default();
        regs.set_af(0x12FF);
        assert_eq!(regs.a, 0x12);
        assert_eq!(regs.f.bits(), 0xF0);
        assert_eq!(regs.af(), 0x12F0);

        regs.set_pair_bytes(Pair::AF, [0x00, 0x0F]);
        assert!(regs.f.is_empty());
    }

    #[test]
    fn flag_helpers_touch_single_bits() {
        let mut regs = Registers::default();
        regs.set_flag(Flags::H, true);
        assert_eq!(regs.f.bits(), 0x20);
        regs.set_flag(Flags::Z, true);
        regs.set_flag(Flags::H, false);
        assert!(regs.flag(Flags::Z));
        assert!(!regs.flag(Flags::H));
        assert_eq!(regs.f.bits(), 0x80);
    }

    proptest! {
        #[test]
        fn general_pairs_round_trip(high in 0u8..=255, low in 0u8..=255) {
            for pair in [Pair::BC, Pair::DE, Pair::HL] {
                let mut regs = Registers::default();
                regs.set_pair_bytes(pair, [high, low]);
                prop_assert_eq!(regs.pair_bytes(pair), [high, low]);
                prop_assert_eq!(regs.pair(pair), (u16::from(high) << 8) | u16::from(low));
            }
        }

        #[test]
        fn af_round_trips_with_masked_flags(high in 0u8..=255, low in 0u8..=255) {
            let mut regs = Registers::default();
            regs.set_pair_bytes(Pair::AF, [high, low]);
            prop_assert_eq!(regs.pair_bytes(Pair::AF), [high, low & 0xF0]);
            prop_assert_eq!(regs.af(), (u16::from(high) << 8) | u16::from(low & 0xF0));
        }

        #[test]
        fn named_accessors_agree_with_pair(value in 0u16..=0xFFFF) {
            let mut regs = Registers::default();
            regs.set_bc(value);
            regs.set_de(value);
            regs.set_hl(value);
            prop_assert_eq!(regs.pair(Pair::BC), value);
            prop_assert_eq!(regs.pair(Pair::DE), value);
            prop_assert_eq!(regs.pair(Pair::HL), value);
            prop_assert_eq!(regs.bc(), value);
        }
    }
}
