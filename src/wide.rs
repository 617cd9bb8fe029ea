//! Optional ergonomic interop with [`widestring`]'s `U16Str`/`U32Str`, for callers who'd rather
//! hold a typed wide-string view than a raw `&[u16]`/`&[u32]` once a transcode has landed in
//! native byte order. Gated behind the `widestring` feature; this crate's own engine never needs
//! it, since every multi-byte code unit is read and written through explicit byte-order accessors.

use widestring::{U16Str, U32Str};

/// View a native-endian UTF-16 code-unit slice as a [`U16Str`].
pub fn as_u16str(units: &[u16]) -> &U16Str {
    U16Str::from_slice(units)
}

/// View a native-endian UTF-32 code-unit slice as a [`U32Str`].
pub fn as_u32str(units: &[u32]) -> &U32Str {
    U32Str::from_slice(units)
}
