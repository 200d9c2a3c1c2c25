use thiserror::Error;

/// Reason a byte buffer failed Modified UTF-8 validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Utf8ErrorKind {
    /// A literal `0x00` inside the counted length. Legal buffers reach
    /// their terminator only via the external length, never an inner byte.
    #[error("embedded NUL byte")]
    EmbeddedNul,
    /// A byte whose high nibble (`0x8..=0xB`, `0xF`) can never start a
    /// sequence, e.g. an isolated continuation byte.
    #[error("illegal lead byte {0:#04x}")]
    IllegalLeadByte(u8),
    /// A multi-byte sequence ran past the end of the buffer.
    #[error("truncated multi-byte sequence")]
    TruncatedSequence,
    /// A continuation byte whose top bits are not `10`.
    #[error("bad continuation byte")]
    BadContinuation,
    /// A multi-byte encoding of a value that should have been encoded
    /// shorter; rejected in strict mode, tolerated under
    /// [`Compat::ClassFileLeq47`](crate::Compat::ClassFileLeq47).
    #[error("overlong encoding of U+{0:04X}")]
    OverlongEncoding(u16),
}

/// Validation failure, carrying the offset of the offending sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at byte offset {offset}")]
pub struct Utf8Error {
    pub(crate) kind: Utf8ErrorKind,
    pub(crate) offset: usize,
}

impl Utf8Error {
    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> Utf8ErrorKind {
        self.kind
    }

    /// Byte offset of the lead byte of the offending sequence.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}
