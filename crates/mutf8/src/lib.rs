//! A codec for the "Modified UTF-8" byte encoding used by class-file string
//! data (constant-pool entries and friends).
//!
//! Modified UTF-8 deviates from standard UTF-8 in three ways:
//!
//! - `U+0000` is always written as the two-byte overlong sequence `C0 80`,
//!   never as a single zero byte, so encoded strings can be NUL-terminated.
//! - There are no 4-byte sequences.
//! - Code points above `U+FFFF` are written as two independent 3-byte
//!   sequences, one per UTF-16 surrogate half, yielding a 6-byte pattern of
//!   the form `ED Ax xx ED Bx xx`.
//!
//! Every function here is a pure, stateless transform over caller-supplied
//! buffers; nothing allocates on the hot path. Bulk conversions follow a
//! two-call contract: a length function reports the exact output size, the
//! caller allocates, and the conversion fills the buffer.
//!
//! ```
//! let units: &[u16] = &[0x0041, 0x0000, 0x20AC];
//! assert_eq!(mutf8::utf8_length(units), 6);
//!
//! let bytes = mutf8::as_utf8(units);
//! assert_eq!(bytes, [0x41, 0xC0, 0x80, 0xE2, 0x82, 0xAC]);
//!
//! assert!(mutf8::is_legal_utf8(&bytes, mutf8::Compat::Strict));
//! assert_eq!(mutf8::to_unicode::<u16>(&bytes), units);
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod code_unit;
mod decode;
mod encode;
mod error;
mod quoted;
mod truncate;
mod validate;

#[cfg(test)]
mod tests;

pub use code_unit::{CodeUnit, is_latin1, is_latin1_units};
pub use decode::{
    UnicodeLength, convert_to_unicode, decode_char, decode_unit, is_supplementary,
    supplementary_char, to_unicode, unicode_length, unicode_length_terminated,
};
pub use encode::{as_utf8, as_utf8_into, encode_unit, utf8_length, utf8_length_as_int};
pub use error::{Utf8Error, Utf8ErrorKind};
#[cfg(any(test, feature = "diagnostics"))]
pub use quoted::from_quoted_ascii;
pub use quoted::{
    as_quoted_ascii, as_quoted_ascii_into, as_quoted_ascii_units, as_quoted_ascii_units_into,
    quoted_ascii_length, quoted_ascii_length_utf8,
};
pub use truncate::truncate_to_legal_utf8;
pub use validate::{Compat, is_legal_utf8, validate};
