use alloc::vec::Vec;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::tests::terminated;
use crate::{
    Compat, as_quoted_ascii, as_utf8, decode_char, from_quoted_ascii, is_legal_utf8,
    quoted_ascii_length_utf8, to_unicode, truncate_to_legal_utf8, unicode_length, utf8_length,
    validate,
};

/// Encoder output decodes back to the original unit sequence, including
/// lone surrogate halves, which are ordinary units at this layer.
#[quickcheck]
fn encode_decode_identity(units: Vec<u16>) -> bool {
    to_unicode::<u16>(&as_utf8(&units)) == units
}

#[quickcheck]
fn encode_decode_identity_latin1(units: Vec<u8>) -> bool {
    let bytes = as_utf8(&units);
    unicode_length(&bytes).is_latin1 && to_unicode::<u8>(&bytes) == units
}

/// `unicode_length` recovers the unit count and classification from any
/// encoder output.
#[test]
fn unicode_length_inverts_the_encoder() {
    fn prop(units: Vec<u16>) -> bool {
        let bytes = as_utf8(&units);
        assert_eq!(bytes.len(), utf8_length(&units));
        let summary = unicode_length(&bytes);
        summary.len == units.len()
            && summary.is_latin1 == units.iter().all(|&u| u <= 0xFF)
            && summary.has_multibyte == units.iter().any(|&u| u == 0 || u > 0x7F)
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u16>) -> bool);
}

/// Every encoder output passes the validator, in both modes.
#[test]
fn encoder_output_is_always_legal() {
    fn prop(units: Vec<u16>) -> bool {
        let bytes = as_utf8(&units);
        is_legal_utf8(&bytes, Compat::Strict) && is_legal_utf8(&bytes, Compat::ClassFileLeq47)
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u16>) -> bool);
}

/// The validator is total over arbitrary bytes, strict is a subset of
/// lenient, and a legal prefix plus a legal suffix never changes verdicts
/// retroactively (the scan is single-pass).
#[test]
fn validator_is_total_and_monotone() {
    fn prop(bytes: Vec<u8>) -> bool {
        let strict = validate(&bytes, Compat::Strict);
        let lenient = validate(&bytes, Compat::ClassFileLeq47);
        if strict.is_ok() && lenient.is_err() {
            return false;
        }
        match (&strict, &lenient) {
            // The scans are identical until the first divergence, so strict
            // can only fail at or before the lenient failure.
            (Err(s), Err(l)) => s.offset() <= l.offset(),
            _ => true,
        }
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Walking any byte buffer one character at a time always terminates:
/// the lenient decoder consumes at least one byte per step.
#[test]
fn decode_char_always_makes_progress() {
    fn prop(bytes: Vec<u8>) -> bool {
        let mut pos = 0;
        let mut steps = 0;
        while pos < bytes.len() {
            let (_, used) = decode_char(&bytes[pos..]);
            if used == 0 {
                return false;
            }
            pos += used;
            steps += 1;
        }
        steps <= bytes.len()
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Strictly legal buffers survive decode-then-reencode bit-exactly.
#[test]
fn strict_buffers_reencode_exactly() {
    fn prop(units: Vec<u16>) -> bool {
        let bytes = as_utf8(&units);
        // Encoder output is canonical, so the round trip through units
        // must reproduce it.
        as_utf8(&to_unicode::<u16>(&bytes)) == bytes
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u16>) -> bool);
}

/// Quoted-ascii measurement matches its writer, and the diagnostic
/// unescaper restores the original byte form.
#[test]
fn quoted_ascii_roundtrip() {
    fn prop(units: Vec<u16>) -> bool {
        // A literal backslash passes through unescaped and would be misread
        // as an escape lead on the way back; the diagnostic unescaper does
        // not cover it, matching the original tool.
        if units.contains(&u16::from(b'\\')) {
            return true;
        }
        let bytes = as_utf8(&units);
        let quoted = as_quoted_ascii(&bytes);
        quoted.len() == quoted_ascii_length_utf8(&bytes) && from_quoted_ascii(&quoted) == bytes
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u16>) -> bool);
}

/// Truncation repair leaves a legal, NUL-terminated buffer behind, no
/// matter where the encoder output was cut.
#[test]
fn repaired_truncations_stay_legal() {
    fn prop(units: Vec<u16>, cut: usize) -> bool {
        let bytes = as_utf8(&units);
        if bytes.len() < 6 {
            return true;
        }
        let cut = 6 + cut % (bytes.len() - 5);
        let mut buf = Vec::from(&bytes[..cut]);
        buf.push(0);
        truncate_to_legal_utf8(&mut buf);
        is_legal_utf8(terminated(&buf), Compat::Strict)
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u16>, usize) -> bool);
}
