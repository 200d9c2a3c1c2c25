//! Legality gate for untrusted Modified UTF-8 buffers.
//!
//! This is the sole place malformed input is rejected; the decoder in
//! [`crate::decode`] assumes its input passed through here first.

use crate::decode;
use crate::error::{Utf8Error, Utf8ErrorKind};

/// Validation mode, selecting how overlong encodings are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compat {
    /// Reject overlong two- and three-byte encodings (the canonical rule
    /// for class-file format versions above 47).
    #[default]
    Strict,
    /// Tolerate overlong encodings, as emitted by compilers targeting
    /// class-file format version 47 and below.
    ClassFileLeq47,
}

impl Compat {
    fn lenient(self) -> bool {
        matches!(self, Compat::ClassFileLeq47)
    }
}

/// Checks that `buffer` is a legal Modified UTF-8 sequence.
///
/// Two-phase scan: a fast path steps over 4-byte blocks of plain non-NUL
/// ASCII, then a byte-by-byte phase classifies everything else. The first
/// structural violation is returned with its offset; see [`Utf8ErrorKind`]
/// for the possible failures.
///
/// # Errors
///
/// Returns the first violation found; a fully consumed buffer is `Ok`.
pub fn validate(buffer: &[u8], compat: Compat) -> Result<(), Utf8Error> {
    let length = buffer.len();
    let lenient = compat.lenient();
    let mut i = 0;

    // For a byte v, (v | (v - 1)) has its high bit clear exactly when
    // 0 < v < 128, so one OR over a block tests four bytes at once.
    while i + 4 <= length {
        let b0 = buffer[i];
        let b1 = buffer[i + 1];
        let b2 = buffer[i + 2];
        let b3 = buffer[i + 3];
        let res = b0
            | b0.wrapping_sub(1)
            | b1
            | b1.wrapping_sub(1)
            | b2
            | b2.wrapping_sub(1)
            | b3
            | b3.wrapping_sub(1);
        if res >= 128 {
            break;
        }
        i += 4;
    }

    while i < length {
        let b = buffer[i];
        // No embedded zeros.
        if b == 0 {
            return Err(Utf8Error {
                kind: Utf8ErrorKind::EmbeddedNul,
                offset: i,
            });
        }
        if b < 128 {
            i += 1;
            continue;
        }
        // See if it's a legal supplementary character. The recombined value
        // is in the valid supplementary range by construction.
        if i + 6 <= length && decode::is_supplementary(&buffer[i..]) {
            i += 6;
            continue;
        }
        let start = i;
        match b >> 4 {
            0xC | 0xD => {
                // 110xxxxx 10xxxxxx
                let Some(&b2) = buffer.get(i + 1) else {
                    return Err(Utf8Error {
                        kind: Utf8ErrorKind::TruncatedSequence,
                        offset: start,
                    });
                };
                if b2 & 0xC0 != 0x80 {
                    return Err(Utf8Error {
                        kind: Utf8ErrorKind::BadContinuation,
                        offset: start,
                    });
                }
                let c = (u16::from(b & 0x1F) << 6) + u16::from(b2 & 0x3F);
                if !(lenient || c == 0 || c >= 0x80) {
                    return Err(Utf8Error {
                        kind: Utf8ErrorKind::OverlongEncoding(c),
                        offset: start,
                    });
                }
                i += 2;
            }
            0xE => {
                // 1110xxxx 10xxxxxx 10xxxxxx
                if i + 2 >= length {
                    return Err(Utf8Error {
                        kind: Utf8ErrorKind::TruncatedSequence,
                        offset: start,
                    });
                }
                let b2 = buffer[i + 1];
                let b3 = buffer[i + 2];
                if b2 & 0xC0 != 0x80 || b3 & 0xC0 != 0x80 {
                    return Err(Utf8Error {
                        kind: Utf8ErrorKind::BadContinuation,
                        offset: start,
                    });
                }
                let c = (u16::from(b & 0x0F) << 12)
                    + (u16::from(b2 & 0x3F) << 6)
                    + u16::from(b3 & 0x3F);
                if !(lenient || c >= 0x800) {
                    return Err(Utf8Error {
                        kind: Utf8ErrorKind::OverlongEncoding(c),
                        offset: start,
                    });
                }
                i += 3;
            }
            _ => {
                return Err(Utf8Error {
                    kind: Utf8ErrorKind::IllegalLeadByte(b),
                    offset: start,
                });
            }
        }
    }
    Ok(())
}

/// Boolean form of [`validate`].
#[must_use]
pub fn is_legal_utf8(buffer: &[u8], compat: Compat) -> bool {
    validate(buffer, compat).is_ok()
}
