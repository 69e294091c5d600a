//! Flag arithmetic shared by the instruction groups.
//!
//! Every helper is pure: it takes the operands plus the current flags and
//! returns the result together with the new flags. Callers commit both only
//! after all of the instruction's bus accesses have succeeded.

use super::Flags;

/// 8-bit increment used by INC r and INC (HL).
///
/// Z from the 8-bit result, N cleared, H on carry out of bit 3, C unchanged.
#[inline]
pub(super) fn inc8(value: u8, flags: Flags) -> (u8, Flags) {
    let result = value.wrapping_add(1);
    let mut out = flags & Flags::C;
    out.set(Flags::Z, result == 0);
    out.set(Flags::H, (value & 0x0F) == 0x0F);
    (result, out)
}

/// 8-bit decrement used by DEC r and DEC (HL).
///
/// Z from the 8-bit result, N set, H on borrow from bit 4, C unchanged.
#[inline]
pub(super) fn dec8(value: u8, flags: Flags) -> (u8, Flags) {
    let result = value.wrapping_sub(1);
    let mut out = (flags & Flags::C) | Flags::N;
    out.set(Flags::Z, result == 0);
    out.set(Flags::H, (value & 0x0F) == 0x00);
    (result, out)
}

/// 16-bit add for `ADD HL,rr`.
///
/// Z and N are cleared; H is the carry out of bit 11 and C the carry out of
/// bit 15, both taken from the unmasked sum.
#[inline]
pub(super) fn add16(hl: u16, value: u16) -> (u16, Flags) {
    let half = (u32::from(hl) & 0x0FFF) + (u32::from(value) & 0x0FFF);
    let full = u32::from(hl) + u32::from(value);

    let mut flags = Flags::empty();
    flags.set(Flags::H, half > 0x0FFF);
    flags.set(Flags::C, full > 0xFFFF);
    (full as u16, flags)
}

/// RLCA: rotate left, bit 7 into both C and bit 0.
#[inline]
pub(super) fn rlca(a: u8) -> (u8, Flags) {
    (a.rotate_left(1), carry_if(a & 0x80 != 0))
}

/// RRCA: rotate right, bit 0 into both C and bit 7.
#[inline]
pub(super) fn rrca(a: u8) -> (u8, Flags) {
    (a.rotate_right(1), carry_if(a & 0x01 != 0))
}

/// RLA: rotate left through carry.
#[inline]
pub(super) fn rla(a: u8, carry_in: bool) -> (u8, Flags) {
    ((a << 1) | u8::from(carry_in), carry_if(a & 0x80 != 0))
}

/// RRA: rotate right through carry.
#[inline]
pub(super) fn rra(a: u8, carry_in: bool) -> (u8, Flags) {
    ((a >> 1) | (u8::from(carry_in) << 7), carry_if(a & 0x01 != 0))
}

#[inline]
fn carry_if(carry: bool) -> Flags {
    if carry {
        Flags::C
    } else {
        Flags::empty()
    }
}

/// Decimal adjust after a BCD addition or subtraction.
///
/// Uses C, H, N and A to pick the correction. Updates Z, H (always cleared)
/// and C; N is left as it was.
pub(super) fn daa(a: u8, flags: Flags) -> (u8, Flags) {
    let mut adjust: u8 = if flags.contains(Flags::C) { 0x60 } else { 0x00 };
    if flags.contains(Flags::H) {
        adjust |= 0x06;
    }

    let result = if !flags.contains(Flags::N) {
        if (a & 0x0F) > 0x09 {
            adjust |= 0x06;
        }
        if a > 0x99 {
            adjust |= 0x60;
        }
        a.wrapping_add(adjust)
    } else {
        a.wrapping_sub(adjust)
    };

    let mut out = flags & Flags::N;
    out.set(Flags::Z, result == 0);
    out.set(Flags::C, adjust >= 0x60);
    (result, out)
}
