//! Quoted-ASCII transcoding: a 7-bit-clean textual rendering where every
//! code unit outside printable ASCII becomes a `\uXXXX` escape.

use alloc::string::String;
use alloc::vec;

use crate::code_unit::CodeUnit;
use crate::decode;
#[cfg(any(test, feature = "diagnostics"))]
use crate::encode;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn is_printable_ascii(c: u16) -> bool {
    (32..127).contains(&c)
}

/// Writes `\u` plus four lowercase hex digits of `c` at the head of `buf`.
fn write_escape(buf: &mut [u8], c: u16) {
    buf[0] = b'\\';
    buf[1] = b'u';
    buf[2] = HEX_DIGITS[usize::from(c >> 12)];
    buf[3] = HEX_DIGITS[usize::from((c >> 8) & 0xF)];
    buf[4] = HEX_DIGITS[usize::from((c >> 4) & 0xF)];
    buf[5] = HEX_DIGITS[usize::from(c & 0xF)];
}

/// Quoted-ascii length of a Modified UTF-8 buffer: one byte per printable
/// ASCII character, six per escaped one.
#[must_use]
pub fn quoted_ascii_length_utf8(utf8: &[u8]) -> usize {
    let mut pos = 0;
    let mut result = 0;
    while pos < utf8.len() {
        let (c, used): (u16, usize) = decode::decode_unit(&utf8[pos..]);
        pos += used;
        if is_printable_ascii(c) {
            result += 1;
        } else {
            result += 6;
        }
    }
    result
}

/// Quoted-ascii length of a code-unit sequence.
#[must_use]
pub fn quoted_ascii_length<T: CodeUnit>(units: &[T]) -> usize {
    units
        .iter()
        .map(|u| if is_printable_ascii(u.as_wide()) { 1 } else { 6 })
        .sum()
}

/// Converts a Modified UTF-8 buffer to quoted ascii, truncating to fit.
///
/// Decodes one code unit at a time (surrogate halves escape separately),
/// emits printable ASCII literally and everything else as `\uXXXX`. Stops
/// before the destination would overflow, always NUL-terminates, and
/// returns the byte length written (terminator excluded).
///
/// # Panics
///
/// Panics if `buf` is empty.
pub fn as_quoted_ascii_into(utf8: &[u8], buf: &mut [u8]) -> usize {
    assert!(!buf.is_empty(), "zero length output buffer");
    let mut pos = 0;
    let mut out = 0;
    while pos < utf8.len() {
        let (c, used): (u16, usize) = decode::decode_unit(&utf8[pos..]);
        pos += used;
        if is_printable_ascii(c) {
            if out + 1 >= buf.len() {
                break; // string is truncated
            }
            buf[out] = c as u8;
            out += 1;
        } else {
            if out + 6 >= buf.len() {
                break; // string is truncated
            }
            write_escape(&mut buf[out..], c);
            out += 6;
        }
    }
    buf[out] = 0;
    out
}

/// Converts a code-unit sequence to quoted ascii, truncating to fit.
/// Same contract as [`as_quoted_ascii_into`].
///
/// # Panics
///
/// Panics if `buf` is empty.
pub fn as_quoted_ascii_units_into<T: CodeUnit>(units: &[T], buf: &mut [u8]) -> usize {
    assert!(!buf.is_empty(), "zero length output buffer");
    let mut out = 0;
    for &u in units {
        let c = u.as_wide();
        if is_printable_ascii(c) {
            if out + 1 >= buf.len() {
                break; // string is truncated
            }
            buf[out] = c as u8;
            out += 1;
        } else {
            if out + 6 >= buf.len() {
                break; // string is truncated
            }
            write_escape(&mut buf[out..], c);
            out += 6;
        }
    }
    buf[out] = 0;
    out
}

/// Two-pass convenience: measures with [`quoted_ascii_length_utf8`],
/// allocates exactly, and converts without truncation.
#[must_use]
pub fn as_quoted_ascii(utf8: &[u8]) -> String {
    let len = quoted_ascii_length_utf8(utf8);
    let mut buf = vec![0u8; len + 1];
    let written = as_quoted_ascii_into(utf8, &mut buf);
    debug_assert_eq!(written, len, "length prediction must be correct");
    buf.truncate(written);
    // The output alphabet is printable ASCII.
    String::from_utf8(buf).expect("quoted ascii is 7-bit clean")
}

/// [`as_quoted_ascii`] over a code-unit sequence.
#[must_use]
pub fn as_quoted_ascii_units<T: CodeUnit>(units: &[T]) -> String {
    let len = quoted_ascii_length(units);
    let mut buf = vec![0u8; len + 1];
    let written = as_quoted_ascii_units_into(units, &mut buf);
    debug_assert_eq!(written, len, "length prediction must be correct");
    buf.truncate(written);
    String::from_utf8(buf).expect("quoted ascii is 7-bit clean")
}

/// Converts a quoted ascii string back to Modified UTF-8 bytes.
///
/// Diagnostic counterpart of [`as_quoted_ascii`], kept to test its output.
/// Recognizes `\t`, `\n`, `\r`, `\f` shorthands and `\uXXXX` with hex
/// digits of either case; each escape decodes to one code unit, encoded at
/// the normal encoder's byte width. Two passes: the first measures, the
/// second fills an exactly-sized buffer.
///
/// # Panics
///
/// Panics on an unrecognized or truncated escape; input is assumed to be
/// well-formed quoted ascii, so a malformed escape is a caller bug.
#[cfg(any(test, feature = "diagnostics"))]
#[must_use]
pub fn from_quoted_ascii(quoted: &str) -> alloc::vec::Vec<u8> {
    let length = unquote_pass(quoted.as_bytes(), None);
    let mut buffer = vec![0u8; length];
    unquote_pass(quoted.as_bytes(), Some(&mut buffer));
    buffer
}

#[cfg(any(test, feature = "diagnostics"))]
fn unquote_pass(quoted: &[u8], mut out: Option<&mut [u8]>) -> usize {
    let mut pos = 0;
    let mut length = 0;
    while pos < quoted.len() {
        let c = quoted[pos];
        if c != b'\\' {
            if let Some(buf) = out.as_deref_mut() {
                buf[length] = c;
            }
            length += 1;
            pos += 1;
            continue;
        }
        match quoted.get(pos + 1) {
            Some(&b'u') => {
                pos += 2;
                assert!(pos + 4 <= quoted.len(), "truncated \\u escape");
                let mut value: u16 = 0;
                for _ in 0..4 {
                    let digit = char::from(quoted[pos])
                        .to_digit(16)
                        .expect("malformed \\u escape");
                    value = (value << 4) + digit as u16;
                    pos += 1;
                }
                let mut tmp = [0u8; 3];
                let sz = encode::encode_unit(value, &mut tmp);
                if let Some(buf) = out.as_deref_mut() {
                    buf[length..length + sz].copy_from_slice(&tmp[..sz]);
                }
                length += sz;
            }
            Some(&e @ (b't' | b'n' | b'r' | b'f')) => {
                let literal = match e {
                    b't' => b'\t',
                    b'n' => b'\n',
                    b'r' => b'\r',
                    _ => b'\x0C',
                };
                if let Some(buf) = out.as_deref_mut() {
                    buf[length] = literal;
                }
                pos += 2;
                length += 1;
            }
            _ => panic!("unrecognized escape in quoted ascii string"),
        }
    }
    length
}
