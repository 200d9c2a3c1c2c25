//! Storage-width capability for code-unit sequences.
//!
//! Strings live in one of two storage widths: 16-bit units (the native wide
//! form, one UTF-16 code unit per cell, lone surrogates representable) or
//! 8-bit units (a restricted Latin-1 form used once a string is known to
//! contain only code points `<= 0xFF`). Bulk conversions are generic over
//! [`CodeUnit`]; the width-specific rules are confined to [`CodeUnit::utf8_size`]
//! and [`CodeUnit::from_decoded`].

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// One storage cell of a code-unit sequence.
///
/// Implemented for `u16` (full UTF-16 code unit) and `u8` (Latin-1 restricted
/// storage). The trait is sealed; no other widths exist.
pub trait CodeUnit: sealed::Sealed + Copy + Eq {
    /// The number of Modified UTF-8 bytes this unit encodes to.
    ///
    /// A unit of value zero sizes as two bytes: it is written as the
    /// mandatory overlong form `C0 80`.
    fn utf8_size(self) -> usize;

    /// The value handed to the encoder. For 8-bit storage this is the unit
    /// widened through `0x00..=0xFF` unchanged.
    fn as_wide(self) -> u16;

    /// How a decoded value is stored. 8-bit storage keeps only the low byte;
    /// callers route values above `0xFF` to 16-bit storage by checking
    /// [`UnicodeLength::is_latin1`](crate::UnicodeLength) first.
    fn from_decoded(value: u16) -> Self;
}

impl CodeUnit for u16 {
    fn utf8_size(self) -> usize {
        if (0x0001..=0x007F).contains(&self) {
            1
        } else if self <= 0x07FF {
            2
        } else {
            3
        }
    }

    fn as_wide(self) -> u16 {
        self
    }

    fn from_decoded(value: u16) -> Self {
        value
    }
}

impl CodeUnit for u8 {
    fn utf8_size(self) -> usize {
        if (0x01..=0x7F).contains(&self) {
            // ASCII character.
            1
        } else {
            // Non-ASCII character, or 0x00 which is two-byte encoded
            // as C0 80 in Modified UTF-8.
            2
        }
    }

    fn as_wide(self) -> u16 {
        u16::from(self)
    }

    fn from_decoded(value: u16) -> Self {
        value as u8
    }
}

/// Whether a single 16-bit code unit fits 8-bit storage.
#[inline]
#[must_use]
pub fn is_latin1(c: u16) -> bool {
    c <= 0x00FF
}

/// Whether every unit of a 16-bit sequence fits 8-bit storage.
#[must_use]
pub fn is_latin1_units(units: &[u16]) -> bool {
    units.iter().all(|&c| is_latin1(c))
}
