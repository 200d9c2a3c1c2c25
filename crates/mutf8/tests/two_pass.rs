//! The measure-allocate-convert contract, exercised end to end through the
//! public API the way the class-file machinery drives it.

use mutf8::{Compat, UnicodeLength};

/// A constant-pool style entry: validate, classify, then pick the storage
/// width and convert with an exactly sized allocation.
#[test]
fn intern_string_pipeline() {
    // "Grüße\0€" as the runtime would hold it in 16-bit units.
    let wide: &[u16] = &[0x47, 0x72, 0xFC, 0xDF, 0x65, 0x0000, 0x20AC];

    let byte_len = mutf8::utf8_length(wide);
    let mut encoded = vec![0u8; byte_len + 1];
    let written = mutf8::as_utf8_into(wide, &mut encoded);
    assert_eq!(written, byte_len);
    assert_eq!(encoded[byte_len], 0);

    let payload = &encoded[..byte_len];
    assert!(mutf8::is_legal_utf8(payload, Compat::Strict));

    let UnicodeLength {
        len,
        is_latin1,
        has_multibyte,
    } = mutf8::unicode_length(payload);
    assert_eq!(len, wide.len());
    assert!(has_multibyte);
    // The euro sign pushes the string out of 8-bit storage.
    assert!(!is_latin1);
    assert!(!mutf8::is_latin1_units(wide));

    let mut units = vec![0u16; len];
    mutf8::convert_to_unicode(payload, &mut units);
    assert_eq!(units, wide);
}

#[test]
fn latin1_entry_takes_narrow_storage() {
    let narrow: &[u8] = b"na\xEFve";
    let encoded = mutf8::as_utf8(narrow);
    assert!(mutf8::is_legal_utf8(&encoded, Compat::Strict));

    let summary = mutf8::unicode_length(&encoded);
    assert!(summary.is_latin1);
    assert_eq!(mutf8::to_unicode::<u8>(&encoded), narrow);
}

/// A legacy-version entry with an overlong encoding is readable only in
/// compat mode, and the lenient decoder still recovers its value.
#[test]
fn legacy_overlong_entry() {
    let overlong = [0xC1, 0x81, b'x'];
    assert!(!mutf8::is_legal_utf8(&overlong, Compat::Strict));
    assert!(mutf8::is_legal_utf8(&overlong, Compat::ClassFileLeq47));

    let (unit, used): (u16, usize) = mutf8::decode_unit(&overlong);
    assert_eq!((unit, used), (0x41, 2));
}

/// Repairing a class-file name cut mid-character keeps it loadable.
#[test]
fn truncated_name_is_repaired_then_validates() {
    let mut name = mutf8::as_utf8(&[0x4Cu16, 0x6A, 0x61, 0x76, 0x61, 0x20AC]);
    name.truncate(name.len() - 1); // lose the last continuation byte
    name.push(0);

    assert!(!mutf8::is_legal_utf8(&name[..name.len() - 1], Compat::Strict));
    mutf8::truncate_to_legal_utf8(&mut name);

    let end = name.iter().position(|&b| b == 0).unwrap();
    assert!(mutf8::is_legal_utf8(&name[..end], Compat::Strict));
    assert_eq!(&name[..end], b"Ljava");
}
