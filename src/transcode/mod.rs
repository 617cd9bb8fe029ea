//! The transcoding engine: UTF-8/UTF-16/UTF-32 conversion in every direction, each with
//! unsuffixed (BOM-driven), `_ne`, `_le`, and `_be` byte-order variants, plus a `_len` counterpart
//! of each that measures without writing.
//!
//! All 72 functions share one decode/encode loop (see [`engine::run`]); the per-direction
//! differences are just which decode/encode primitive and which byte-order-mark to look for.

mod engine;
mod macros;
mod scalar_codec;

pub mod abi;

use scalar_codec::{decode_utf16, decode_utf32, decode_utf8, encode_utf16, encode_utf32, encode_utf8};
use engine::DirectionSpec;

pub(crate) use engine::effective_span;

/// How long an input span is, for functions that accept a source buffer.
///
/// Replaces the distilled spec's `usize::MAX`-as-sentinel convention (still used literally by the
/// raw-pointer shim in [`abi`], where no richer type is available across the boundary).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Length {
    /// The span holds exactly this many source code units.
    Units(usize),
    /// The span runs up to (and excludes) the first all-zero code unit.
    NulTerminated,
}

const UTF8_TO_UTF8: DirectionSpec = DirectionSpec {
    src_width: 1,
    dst_width: 1,
    decode: decode_utf8,
    encode: encode_utf8,
    detect_bom: engine::detect_bom_utf8,
};

const UTF8_TO_UTF16: DirectionSpec = DirectionSpec {
    src_width: 1,
    dst_width: 2,
    decode: decode_utf8,
    encode: encode_utf16,
    detect_bom: engine::detect_bom_utf8,
};

const UTF8_TO_UTF32: DirectionSpec = DirectionSpec {
    src_width: 1,
    dst_width: 4,
    decode: decode_utf8,
    encode: encode_utf32,
    detect_bom: engine::detect_bom_utf8,
};

const UTF16_TO_UTF8: DirectionSpec = DirectionSpec {
    src_width: 2,
    dst_width: 1,
    decode: decode_utf16,
    encode: encode_utf8,
    detect_bom: engine::detect_bom_utf16,
};

const UTF16_TO_UTF16: DirectionSpec = DirectionSpec {
    src_width: 2,
    dst_width: 2,
    decode: decode_utf16,
    encode: encode_utf16,
    detect_bom: engine::detect_bom_utf16,
};

const UTF16_TO_UTF32: DirectionSpec = DirectionSpec {
    src_width: 2,
    dst_width: 4,
    decode: decode_utf16,
    encode: encode_utf32,
    detect_bom: engine::detect_bom_utf16,
};

const UTF32_TO_UTF8: DirectionSpec = DirectionSpec {
    src_width: 4,
    dst_width: 1,
    decode: decode_utf32,
    encode: encode_utf8,
    detect_bom: engine::detect_bom_utf32,
};

const UTF32_TO_UTF16: DirectionSpec = DirectionSpec {
    src_width: 4,
    dst_width: 2,
    decode: decode_utf32,
    encode: encode_utf16,
    detect_bom: engine::detect_bom_utf32,
};

const UTF32_TO_UTF32: DirectionSpec = DirectionSpec {
    src_width: 4,
    dst_width: 4,
    decode: decode_utf32,
    encode: encode_utf32,
    detect_bom: engine::detect_bom_utf32,
};

macros::direction! {
    /// Transcode UTF-8 to UTF-8: validates and re-encodes, substituting U+FFFD (or halting, under
    /// [`crate::Flags::STRICT_CODEPOINTS`]) for any malformed sequence.
    spec = UTF8_TO_UTF8,
    convert = utf8_to_utf8, convert_ne = utf8_to_utf8_ne, convert_le = utf8_to_utf8_le, convert_be = utf8_to_utf8_be,
    len = utf8_to_utf8_len, len_ne = utf8_to_utf8_ne_len, len_le = utf8_to_utf8_le_len, len_be = utf8_to_utf8_be_len,
}

macros::direction! {
    /// Transcode UTF-8 to UTF-16.
    spec = UTF8_TO_UTF16,
    convert = utf8_to_utf16, convert_ne = utf8_to_utf16_ne, convert_le = utf8_to_utf16_le, convert_be = utf8_to_utf16_be,
    len = utf8_to_utf16_len, len_ne = utf8_to_utf16_ne_len, len_le = utf8_to_utf16_le_len, len_be = utf8_to_utf16_be_len,
}

macros::direction! {
    /// Transcode UTF-8 to UTF-32.
    spec = UTF8_TO_UTF32,
    convert = utf8_to_utf32, convert_ne = utf8_to_utf32_ne, convert_le = utf8_to_utf32_le, convert_be = utf8_to_utf32_be,
    len = utf8_to_utf32_len, len_ne = utf8_to_utf32_ne_len, len_le = utf8_to_utf32_le_len, len_be = utf8_to_utf32_be_len,
}

macros::direction! {
    /// Transcode UTF-16 to UTF-8.
    spec = UTF16_TO_UTF8,
    convert = utf16_to_utf8, convert_ne = utf16_to_utf8_ne, convert_le = utf16_to_utf8_le, convert_be = utf16_to_utf8_be,
    len = utf16_to_utf8_len, len_ne = utf16_to_utf8_ne_len, len_le = utf16_to_utf8_le_len, len_be = utf16_to_utf8_be_len,
}

macros::direction! {
    /// Transcode UTF-16 to UTF-16: re-validates, and can change or impose a byte order.
    spec = UTF16_TO_UTF16,
    convert = utf16_to_utf16, convert_ne = utf16_to_utf16_ne, convert_le = utf16_to_utf16_le, convert_be = utf16_to_utf16_be,
    len = utf16_to_utf16_len, len_ne = utf16_to_utf16_ne_len, len_le = utf16_to_utf16_le_len, len_be = utf16_to_utf16_be_len,
}

macros::direction! {
    /// Transcode UTF-16 to UTF-32.
    spec = UTF16_TO_UTF32,
    convert = utf16_to_utf32, convert_ne = utf16_to_utf32_ne, convert_le = utf16_to_utf32_le, convert_be = utf16_to_utf32_be,
    len = utf16_to_utf32_len, len_ne = utf16_to_utf32_ne_len, len_le = utf16_to_utf32_le_len, len_be = utf16_to_utf32_be_len,
}

macros::direction! {
    /// Transcode UTF-32 to UTF-8.
    spec = UTF32_TO_UTF8,
    convert = utf32_to_utf8, convert_ne = utf32_to_utf8_ne, convert_le = utf32_to_utf8_le, convert_be = utf32_to_utf8_be,
    len = utf32_to_utf8_len, len_ne = utf32_to_utf8_ne_len, len_le = utf32_to_utf8_le_len, len_be = utf32_to_utf8_be_len,
}

macros::direction! {
    /// Transcode UTF-32 to UTF-16.
    spec = UTF32_TO_UTF16,
    convert = utf32_to_utf16, convert_ne = utf32_to_utf16_ne, convert_le = utf32_to_utf16_le, convert_be = utf32_to_utf16_be,
    len = utf32_to_utf16_len, len_ne = utf32_to_utf16_ne_len, len_le = utf32_to_utf16_le_len, len_be = utf32_to_utf16_be_len,
}

macros::direction! {
    /// Transcode UTF-32 to UTF-32: re-validates, and can change or impose a byte order.
    spec = UTF32_TO_UTF32,
    convert = utf32_to_utf32, convert_ne = utf32_to_utf32_ne, convert_le = utf32_to_utf32_le, convert_be = utf32_to_utf32_be,
    len = utf32_to_utf32_len, len_ne = utf32_to_utf32_ne_len, len_le = utf32_to_utf32_le_len, len_be = utf32_to_utf32_be_len,
}
