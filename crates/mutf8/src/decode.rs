//! Single-character decode and bulk byte-to-unit conversion.
//!
//! Everything here assumes its input has already passed the format checker
//! ([`validate`](crate::validate)); decoding is deliberately infallible and
//! degrades on malformed bytes instead of erroring (see [`decode_unit`]).

use alloc::vec;
use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::code_unit::CodeUnit;

/// Decodes one code unit from the head of a Modified UTF-8 buffer.
///
/// Returns the decoded unit and the number of bytes consumed (1, 2 or 3).
/// The lead byte's high nibble selects the sequence length:
///
/// - `0x0..=0x7`: one byte, the value is the byte itself.
/// - `0xC`/`0xD`: `110xxxxx 10xxxxxx`, two bytes.
/// - `0xE`: `1110xxxx 10xxxxxx 10xxxxxx`, three bytes.
/// - `0x8..=0xB`, `0xF`: never a legal start.
///
/// This function is not the legality gate. If the expected continuation
/// bytes are missing or malformed it does not fail: it returns the raw lead
/// byte's value and consumes exactly one byte, so a caller looping over a
/// buffer always makes progress.
///
/// # Panics
///
/// Panics if `bytes` is empty.
pub fn decode_unit<T: CodeUnit>(bytes: &[u8]) -> (T, usize) {
    let ch = bytes[0];
    match ch >> 4 {
        0x8..=0xB | 0xF => {
            // Shouldn't happen in checked input.
        }
        0xC | 0xD => {
            // 110xxxxx 10xxxxxx
            if let Some(&ch2) = bytes.get(1) {
                if ch2 & 0xC0 == 0x80 {
                    let high_five = u16::from(ch & 0x1F);
                    let low_six = u16::from(ch2 & 0x3F);
                    return (T::from_decoded((high_five << 6) + low_six), 2);
                }
            }
        }
        0xE => {
            // 1110xxxx 10xxxxxx 10xxxxxx
            if let [_, ch2, ch3, ..] = *bytes {
                if ch2 & 0xC0 == 0x80 && ch3 & 0xC0 == 0x80 {
                    let high_four = u16::from(ch & 0x0F);
                    let mid_six = u16::from(ch2 & 0x3F);
                    let low_six = u16::from(ch3 & 0x3F);
                    return (T::from_decoded((((high_four << 6) + mid_six) << 6) + low_six), 3);
                }
            }
        }
        _ => return (T::from_decoded(u16::from(ch)), 1),
    }
    // Default bad result: take the lead byte as-is and make progress somehow.
    (T::from_decoded(u16::from(ch)), 1)
}

/// Whether `bytes` starts with the 6-byte supplementary-character pattern
/// `11101101 1010xxxx 10xxxxxx 11101101 1011xxxx 10xxxxxx`.
#[must_use]
pub fn is_supplementary(bytes: &[u8]) -> bool {
    matches!(*bytes, [0xED, b1, b2, 0xED, b4, b5, ..]
        if b1 & 0xF0 == 0xA0 && b2 & 0xC0 == 0x80
        && b4 & 0xF0 == 0xB0 && b5 & 0xC0 == 0x80)
}

/// Combines the two surrogate halves of a 6-byte supplementary encoding into
/// a code point. The first six bytes must satisfy [`is_supplementary`].
#[must_use]
pub fn supplementary_char(bytes: &[u8]) -> u32 {
    0x10000
        + (u32::from(bytes[1] & 0x0F) << 16)
        + (u32::from(bytes[2] & 0x3F) << 10)
        + (u32::from(bytes[4] & 0x0F) << 6)
        + u32::from(bytes[5] & 0x3F)
}

/// Decodes one code point from the head of a Modified UTF-8 buffer.
///
/// Unlike [`decode_unit`] this recognizes the 6-byte supplementary form and
/// returns the recombined scalar value, consuming six bytes. Anything else
/// delegates to [`decode_unit`] and consumes one to three bytes.
///
/// # Panics
///
/// Panics if `bytes` is empty.
pub fn decode_char(bytes: &[u8]) -> (u32, usize) {
    if bytes.len() >= 6 && is_supplementary(bytes) {
        return (supplementary_char(bytes), 6);
    }
    let (unit, used): (u16, usize) = decode_unit(bytes);
    (u32::from(unit), used)
}

/// Result of scanning a Modified UTF-8 buffer with [`unicode_length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeLength {
    /// Number of decoded code units (surrogate halves count separately).
    pub len: usize,
    /// Whether every decoded code unit is `<= 0xFF`, i.e. the string fits
    /// 8-bit storage.
    pub is_latin1: bool,
    /// Whether any multi-byte sequence occurred.
    pub has_multibyte: bool,
}

/// Counts the code units encoded in a buffer of known length.
///
/// The number of units can be determined by noting that bytes of the form
/// `10xxxxxx` are continuation bytes of a 2- or 3-byte sequence, all others
/// either are characters themselves or start a multi-byte character; so the
/// unit count is the byte count minus the continuation-byte count.
///
/// The Latin-1 classification keys off the byte preceding each continuation
/// byte: `0xC3` is the highest lead byte whose decoded value can still be
/// `<= 0xFF`, so any higher lead byte marks the string as non-Latin-1. The
/// buffer must be in legal form, verified by the format checker.
#[must_use]
pub fn unicode_length(bytes: &[u8]) -> UnicodeLength {
    let mut len = bytes.len();
    let mut is_latin1 = true;
    let mut has_multibyte = false;
    let mut prev: u8 = 0;
    for &c in bytes {
        if c & 0xC0 == 0x80 {
            // Multibyte, check if valid latin1 character.
            has_multibyte = true;
            if prev > 0xC3 {
                is_latin1 = false;
            }
            len -= 1;
        }
        prev = c;
    }
    UnicodeLength {
        len,
        is_latin1,
        has_multibyte,
    }
}

/// Counts the code units of a NUL-terminated buffer.
///
/// Scans up to the first `0x00` byte (or the end of the slice if there is
/// none), counting every byte that is not a continuation byte. Agrees with
/// [`unicode_length`] applied to the span before the terminator.
#[must_use]
pub fn unicode_length_terminated(bytes: &[u8]) -> UnicodeLength {
    let counted = match bytes.find_byte(0) {
        Some(end) => &bytes[..end],
        None => bytes,
    };
    let mut len = 0;
    let mut is_latin1 = true;
    let mut has_multibyte = false;
    let mut prev: u8 = 0;
    for &c in counted {
        if c & 0xC0 == 0x80 {
            has_multibyte = true;
            if prev > 0xC3 {
                is_latin1 = false;
            }
        } else {
            len += 1;
        }
        prev = c;
    }
    UnicodeLength {
        len,
        is_latin1,
        has_multibyte,
    }
}

/// Decodes exactly `dst.len()` code units from `utf8` into `dst`.
///
/// The destination length is the unit count reported by [`unicode_length`];
/// the source must hold at least that many encoded characters.
///
/// # Panics
///
/// Panics if `utf8` runs out before `dst` is filled.
pub fn convert_to_unicode<T: CodeUnit>(utf8: &[u8], dst: &mut [T]) {
    let mut pos = 0;
    let mut index = 0;

    // ASCII case loop optimization.
    while index < dst.len() {
        let ch = utf8[pos];
        if ch > 0x7F {
            break;
        }
        dst[index] = T::from_decoded(u16::from(ch));
        pos += 1;
        index += 1;
    }

    while index < dst.len() {
        let (unit, used) = decode_unit::<T>(&utf8[pos..]);
        dst[index] = unit;
        pos += used;
        index += 1;
    }
}

/// Two-pass convenience: measures `utf8` with [`unicode_length`], allocates
/// exactly, and converts.
#[must_use]
pub fn to_unicode<T: CodeUnit>(utf8: &[u8]) -> Vec<T> {
    let summary = unicode_length(utf8);
    let mut out = vec![T::from_decoded(0); summary.len];
    convert_to_unicode(utf8, &mut out);
    out
}
