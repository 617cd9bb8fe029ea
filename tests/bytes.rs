//! Black-box tests against [`unistr::bytes`] from outside the crate.

use unistr::bytes::{int_to_string, is_null_or_whitespace, next_line, safe_concat, safe_copy};
use unistr::Status;

#[test]
fn whitespace_and_trim_helpers_agree_on_blank_input() {
    assert!(is_null_or_whitespace(None));
    assert!(is_null_or_whitespace(Some("\t\t\n ")));
    assert!(!is_null_or_whitespace(Some("not blank")));
}

#[test]
fn next_line_walks_a_multi_line_buffer() {
    let text = "first\r\nsecond\nthird";
    let (end, next) = next_line(text);
    assert_eq!(&text[..end], "first");
    let rest = &text[next..];
    let (end2, next2) = next_line(rest);
    assert_eq!(&rest[..end2], "second");
    let rest2 = &rest[next2..];
    let (end3, next3) = next_line(rest2);
    assert_eq!(&rest2[..end3], "third");
    assert_eq!(end3, next3); // no trailing terminator
}

#[test]
fn next_line_splits_on_unicode_line_terminators_not_just_lf() {
    let text = "one\u{2028}two\u{0085}three\rfour";
    let (e1, n1) = next_line(text);
    assert_eq!(&text[..e1], "one");
    let rest = &text[n1..];
    let (e2, n2) = next_line(rest);
    assert_eq!(&rest[..e2], "two");
    let rest2 = &rest[n2..];
    let (e3, n3) = next_line(rest2);
    assert_eq!(&rest2[..e3], "three");
    let rest3 = &rest2[n3..];
    let (e4, n4) = next_line(rest3);
    assert_eq!(&rest3[..e4], "four");
    assert_eq!(e4, n4);
}

#[test]
fn safe_copy_and_safe_concat_never_overrun_the_destination() {
    let mut dst = [0u8; 6];
    assert_eq!(safe_copy(&mut dst, b"abc"), Ok(3));
    assert_eq!(safe_concat(&mut dst, 3, b"def"), Ok(6));
    assert_eq!(&dst, b"abcdef");
    assert_eq!(safe_concat(&mut dst, 6, b"!"), Err(Status::Range));
    assert_eq!(&dst, b"abcdef"); // untouched by the rejected call
}

#[test]
fn int_to_string_round_trips_through_parse() {
    let mut buf = [0u8; 24];
    for &(value, radix) in &[(0i64, 10u32), (-1, 10), (i64::MIN, 10), (305_441_741, 16)] {
        let n = int_to_string(value, radix, &mut buf).unwrap();
        let rendered = core::str::from_utf8(&buf[..n]).unwrap();
        let magnitude = u64::from_str_radix(rendered.trim_start_matches('-'), radix).unwrap();
        let parsed = if value < 0 { -(magnitude as i128) } else { magnitude as i128 };
        assert_eq!(parsed, value as i128, "radix {radix} rendered {rendered:?}");
    }
}
