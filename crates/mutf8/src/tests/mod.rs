mod property_roundtrip;

use bstr::ByteSlice;

/// The span of a C-style buffer before its NUL terminator.
pub(crate) fn terminated(buf: &[u8]) -> &[u8] {
    match buf.find_byte(0) {
        Some(end) => &buf[..end],
        None => buf,
    }
}
