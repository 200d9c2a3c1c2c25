//! Repair of buffers cut off mid-character.

/// Whether `b` could be the starting byte of an encoded 2, 3 or 6 byte
/// sequence.
fn is_starting_byte(b: u8) -> bool {
    (0xC0..=0xEF).contains(&b)
}

/// Terminates a truncated buffer on a character boundary.
///
/// Takes a buffer that was valid Modified UTF-8 but may have been cut off
/// such that the last encoding is partial, and moves its NUL terminator so
/// that any partial encoding is gone.
///
/// Modified UTF-8 encodes characters in sequences of 1, 2, 3 or 6 bytes.
/// Rather than classifying every way a tail can be partial, we note that the
/// string is already truncated, so dropping one more character is not
/// significant: scan backward for the first byte that can start an encoded
/// sequence and terminate there. The one complication is the 6-byte form,
/// whose first and fourth bytes are both `0xED`: if the three bytes before a
/// candidate `0xED` are themselves a high-surrogate encoding (`ED Ax xx`),
/// the candidate is the second half's lead byte and the boundary moves back
/// three more bytes, dropping the whole 6-byte unit.
///
/// A buffer that was already fully legal may still lose its final character;
/// callers that must avoid any loss validate first and skip the repair when
/// validation passed.
///
/// # Panics
///
/// Panics if the buffer is not NUL-terminated or is 5 bytes or shorter;
/// both indicate a caller bug, not a data error.
pub fn truncate_to_legal_utf8(buffer: &mut [u8]) {
    let length = buffer.len();
    assert!(length > 5, "invalid length");
    assert!(buffer[length - 1] == 0, "buffer should be NUL-terminated");

    if buffer[length - 2] < 128 {
        // Valid "ascii" - common case.
        return;
    }

    let mut index = length - 2;
    while index > 0 {
        if is_starting_byte(buffer[index]) {
            if buffer[index] == 0xED
                && index >= 3
                && buffer[index - 3] == 0xED
                && buffer[index - 2] & 0xF0 == 0xA0
            {
                // Only EDAx needs checking: the "missing" values in EDAxxx
                // would not be valid 3 byte encodings.
                debug_assert!(
                    (0x80..=0xBF).contains(&buffer[index - 1]),
                    "sanity check"
                );
                // It was the fourth byte, so truncate 3 bytes earlier.
                index -= 3;
            }
            buffer[index] = 0;
            break;
        }
        index -= 1;
    }
}
