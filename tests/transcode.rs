//! Black-box tests against the public transcoding API, exercised the way an external caller would
//! use it: real multi-byte scalars, mixed byte orders, and the measure/convert pairing.

use unistr::transcode::{utf16_to_utf8_le, utf32_to_utf16_be, utf8_to_utf16_be, utf8_to_utf32_ne, utf8_to_utf8, Length};
use unistr::{Flags, Status};

#[test]
fn utf8_to_utf16_be_handles_supplementary_plane() {
    // U+1F600 GRINNING FACE, encoded as a UTF-8 4-byte sequence.
    let input = "\u{1F600}".as_bytes();
    let mut out = [0u8; 8];
    let r = utf8_to_utf16_be(input, Length::Units(input.len()), Flags::empty(), &mut out);
    assert_eq!(r.status, Status::Success);
    assert_eq!(r.out_len, 2); // surrogate pair
    assert_eq!(&out[..4], &[0xD8, 0x3D, 0xDE, 0x00]);
}

#[test]
fn utf16_le_surrogate_pair_round_trips_to_utf8() {
    let mut input = Vec::new();
    input.extend_from_slice(&0xD83D_u16.to_le_bytes());
    input.extend_from_slice(&0xDE00_u16.to_le_bytes());
    let mut out = [0u8; 8];
    let r = utf16_to_utf8_le(&input, Length::Units(2), Flags::empty(), &mut out);
    assert_eq!(r.status, Status::Success);
    assert_eq!(&out[..r.out_len], "\u{1F600}".as_bytes());
}

#[test]
fn utf32_to_utf16_be_rejects_surrogate_scalar_under_strict_flag() {
    let input = 0xD800_u32.to_be_bytes(); // a lone surrogate value is never a valid scalar
    let mut out = [0u8; 4];
    let r = utf32_to_utf16_be(&input, Length::Units(1), Flags::STRICT_CODEPOINTS, &mut out);
    assert_eq!(r.status, Status::InvalidCodepoint);
}

#[test]
fn utf32_to_utf16_be_substitutes_replacement_by_default() {
    let input = 0xD800_u32.to_be_bytes();
    let mut out = [0u8; 4];
    let r = utf32_to_utf16_be(&input, Length::Units(1), Flags::empty(), &mut out);
    assert_eq!(r.status, Status::Success);
    assert_eq!(&out[..2], &[0xFF, 0xFD]); // U+FFFD big-endian
}

#[test]
fn nul_terminated_length_stops_at_terminator() {
    let input = b"hi\0garbage";
    let mut out = [0u8; 12];
    let r = utf8_to_utf32_ne(input, Length::NulTerminated, Flags::empty(), &mut out);
    assert_eq!(r.status, Status::Success);
    assert_eq!(r.out_len, 2);
}

#[test]
fn utf8_strict_rejects_the_surrogate_value_overlong_sequence() {
    // ED A0 80 is a well-formed 3-byte UTF-8 shape that encodes U+D800, a surrogate value and
    // therefore never a valid scalar.
    let input = [0xED, 0xA0, 0x80];
    let mut out = [0u8; 4];
    let r = utf8_to_utf8(&input, Length::Units(input.len()), Flags::STRICT_CODEPOINTS, &mut out);
    assert_eq!(r.status, Status::InvalidCodepoint);
    assert_eq!(r.in_processed, 0);
}

#[test]
fn utf8_lenient_substitutes_replacement_for_the_surrogate_value_sequence() {
    let input = [0xED, 0xA0, 0x80];
    let mut out = [0u8; 4];
    let r = utf8_to_utf8(&input, Length::Units(input.len()), Flags::empty(), &mut out);
    assert_eq!(r.status, Status::Success);
    assert_eq!(r.out_len, 3);
    assert_eq!(&out[..3], &[0xEF, 0xBF, 0xBD]); // U+FFFD
}

#[test]
fn out_len_is_consistent_between_measure_and_convert_for_mixed_text() {
    let text = "Héllo, 世界! \u{1F600}";
    let input = text.as_bytes();
    let measured = unistr::transcode::utf8_to_utf16_ne_len(input, Length::Units(input.len()), Flags::empty());
    let mut out = vec![0u8; measured.out_len * 2 + 2];
    let converted = unistr::transcode::utf8_to_utf16_ne(input, Length::Units(input.len()), Flags::empty(), &mut out);
    assert_eq!(measured.status, Status::Success);
    assert_eq!(converted.status, Status::Success);
    assert_eq!(measured.out_len, converted.out_len);
}
