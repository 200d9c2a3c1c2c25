//! Single-unit encode and bulk unit-to-byte conversion.

use alloc::vec;
use alloc::vec::Vec;

use crate::code_unit::CodeUnit;

/// Writes one code unit as Modified UTF-8 and returns the number of bytes
/// written (1, 2 or 3).
///
/// Value zero takes the two-byte overlong form `C0 80`: a legal buffer never
/// contains a single zero byte, so the encoded form can be NUL-terminated.
/// Surrogate halves encode like any other 3-byte value; a caller looping
/// over a surrogate pair therefore produces the 6-byte supplementary form
/// without special-casing it here.
///
/// # Panics
///
/// Panics if `buf` is shorter than the encoded size.
pub fn encode_unit(c: u16, buf: &mut [u8]) -> usize {
    if c != 0 && c <= 0x7F {
        buf[0] = c as u8;
        return 1;
    }

    if c <= 0x7FF {
        // 11 bits or less.
        buf[0] = 0xC0 | (c >> 6) as u8; /* 110xxxxx */
        buf[1] = 0x80 | (c & 0x3F) as u8; /* 10xxxxxx */
        return 2;
    }

    // Possibly full 16 bits.
    buf[0] = 0xE0 | (c >> 12) as u8; /* 1110xxxx */
    buf[1] = 0x80 | ((c >> 6) & 0x3F) as u8; /* 10xxxxxx */
    buf[2] = 0x80 | (c & 0x3F) as u8; /* 10xxxxxx */
    3
}

/// Exact number of bytes a unit sequence encodes to.
#[must_use]
pub fn utf8_length<T: CodeUnit>(units: &[T]) -> usize {
    units.iter().map(|u| u.utf8_size()).sum()
}

/// [`utf8_length`] narrowed to `i32`.
///
/// If the total would exceed `i32::MAX - 1` the sum stops at the last unit
/// that still fits, so the caller can add one byte for a NUL terminator
/// without overflow. The cut always falls on a completed encoding.
#[must_use]
pub fn utf8_length_as_int<T: CodeUnit>(units: &[T]) -> i32 {
    let mut result: usize = 0;
    for &u in units {
        let sz = u.utf8_size();
        if result + sz > (i32::MAX as usize) - 1 {
            break;
        }
        result += sz;
    }
    result as i32
}

/// Encodes a unit sequence into `buf`, truncating to fit.
///
/// Stops before any character whose encoded size would not leave room for
/// the NUL terminator, writes the terminator, and returns the byte length
/// written (terminator excluded). Truncation is not an error; callers that
/// must detect it compare the return value against [`utf8_length`].
///
/// # Panics
///
/// Panics if `buf` is empty.
pub fn as_utf8_into<T: CodeUnit>(units: &[T], buf: &mut [u8]) -> usize {
    assert!(!buf.is_empty(), "zero length output buffer");
    let mut remaining = buf.len();
    let mut pos = 0;
    for &u in units {
        let sz = u.utf8_size();
        if sz >= remaining {
            break; // string is truncated
        }
        remaining -= sz;
        pos += encode_unit(u.as_wide(), &mut buf[pos..]);
    }
    buf[pos] = 0;
    pos
}

/// Two-pass convenience: measures with [`utf8_length`], allocates exactly,
/// and encodes without truncation. The returned bytes carry no terminator;
/// use [`as_utf8_into`] with a `utf8_length(units) + 1` buffer for a
/// NUL-terminated form.
#[must_use]
pub fn as_utf8<T: CodeUnit>(units: &[T]) -> Vec<u8> {
    let utf8_len = utf8_length(units);
    let mut buf = vec![0u8; utf8_len + 1];
    let written = as_utf8_into(units, &mut buf);
    debug_assert_eq!(written, utf8_len, "length prediction must be correct");
    buf.truncate(written);
    buf
}
