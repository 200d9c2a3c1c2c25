#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mutf8::{
    Compat, from_quoted_ascii, is_legal_utf8, to_unicode, truncate_to_legal_utf8, unicode_length,
    validate,
};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    lenient: bool,
    buf: &'a [u8],
}

fuzz_target!(|input: Input| {
    let Input { lenient, buf } = input;
    let compat = if lenient {
        Compat::ClassFileLeq47
    } else {
        Compat::Strict
    };

    let verdict = validate(buf, compat);
    assert_eq!(verdict.is_ok(), is_legal_utf8(buf, compat));

    if verdict.is_ok() {
        let units: Vec<u16> = to_unicode(buf);
        assert_eq!(units.len(), unicode_length(buf).len);

        if compat == Compat::Strict {
            // Strict buffers are canonical and must re-encode bit-exactly.
            assert_eq!(mutf8::as_utf8(&units), buf);

            // Quoted ascii is lossless for backslash-free strings.
            if !buf.contains(&b'\\') {
                let quoted = mutf8::as_quoted_ascii(buf);
                assert_eq!(from_quoted_ascii(&quoted), buf);
            }
        }
    }

    // Repairing a NUL-terminated copy of a legal buffer must keep the
    // surviving span legal.
    if buf.len() > 5 && is_legal_utf8(buf, Compat::Strict) {
        let mut owned = buf.to_vec();
        owned.push(0);
        truncate_to_legal_utf8(&mut owned);
        let end = owned.iter().position(|&b| b == 0).unwrap();
        assert!(is_legal_utf8(&owned[..end], Compat::Strict));
    }
});
