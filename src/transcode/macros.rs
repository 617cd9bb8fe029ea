//! Stamps out one direction's eight public functions (four `convert` byte-order variants, four
//! `measured_length` counterparts) over the shared [`super::engine::run`] loop.
//!
//! Function names are passed in explicitly rather than built by identifier concatenation: this
//! crate targets stable `macro_rules!`, which cannot paste identifiers together without an extra
//! proc-macro dependency the teacher didn't carry.
macro_rules! direction {
    (
        $(#[$doc:meta])*
        spec = $spec:expr,
        convert = $convert:ident,
        convert_ne = $convert_ne:ident,
        convert_le = $convert_le:ident,
        convert_be = $convert_be:ident,
        len = $len:ident,
        len_ne = $len_ne:ident,
        len_le = $len_le:ident,
        len_be = $len_be:ident,
    ) => {
        $(#[$doc])*
        ///
        /// Byte order is resolved from a leading byte-order-mark when present (and not forbidden
        /// by [`crate::Flags::FORBID_BOM`]); otherwise this behaves as the `_ne` variant.
        pub fn $convert(input: &[u8], in_len: $crate::transcode::Length, flags: $crate::Flags, out: &mut [u8]) -> $crate::ConvertResult {
            $crate::transcode::engine::run(&$spec, input, in_len, $crate::transcode::engine::EndianMode::Bom, flags, Some(out))
        }

        $(#[$doc])*
        ///
        /// Reads and writes multi-byte code units in the host's native byte order.
        pub fn $convert_ne(input: &[u8], in_len: $crate::transcode::Length, flags: $crate::Flags, out: &mut [u8]) -> $crate::ConvertResult {
            let ne = $crate::endian::host_is_little_endian();
            $crate::transcode::engine::run(&$spec, input, in_len, $crate::transcode::engine::EndianMode::Fixed(ne), flags, Some(out))
        }

        $(#[$doc])*
        ///
        /// Reads and writes multi-byte code units little-endian, regardless of host order.
        pub fn $convert_le(input: &[u8], in_len: $crate::transcode::Length, flags: $crate::Flags, out: &mut [u8]) -> $crate::ConvertResult {
            $crate::transcode::engine::run(&$spec, input, in_len, $crate::transcode::engine::EndianMode::Fixed(true), flags, Some(out))
        }

        $(#[$doc])*
        ///
        /// Reads and writes multi-byte code units big-endian, regardless of host order.
        pub fn $convert_be(input: &[u8], in_len: $crate::transcode::Length, flags: $crate::Flags, out: &mut [u8]) -> $crate::ConvertResult {
            $crate::transcode::engine::run(&$spec, input, in_len, $crate::transcode::engine::EndianMode::Fixed(false), flags, Some(out))
        }

        #[doc = concat!("Like [`", stringify!($convert), "`], but only measures: `out_len` is reported, nothing is written.")]
        pub fn $len(input: &[u8], in_len: $crate::transcode::Length, flags: $crate::Flags) -> $crate::ConvertResult {
            $crate::transcode::engine::run(&$spec, input, in_len, $crate::transcode::engine::EndianMode::Bom, flags, None)
        }

        #[doc = concat!("Like [`", stringify!($convert_ne), "`], but only measures.")]
        pub fn $len_ne(input: &[u8], in_len: $crate::transcode::Length, flags: $crate::Flags) -> $crate::ConvertResult {
            let ne = $crate::endian::host_is_little_endian();
            $crate::transcode::engine::run(&$spec, input, in_len, $crate::transcode::engine::EndianMode::Fixed(ne), flags, None)
        }

        #[doc = concat!("Like [`", stringify!($convert_le), "`], but only measures.")]
        pub fn $len_le(input: &[u8], in_len: $crate::transcode::Length, flags: $crate::Flags) -> $crate::ConvertResult {
            $crate::transcode::engine::run(&$spec, input, in_len, $crate::transcode::engine::EndianMode::Fixed(true), flags, None)
        }

        #[doc = concat!("Like [`", stringify!($convert_be), "`], but only measures.")]
        pub fn $len_be(input: &[u8], in_len: $crate::transcode::Length, flags: $crate::Flags) -> $crate::ConvertResult {
            $crate::transcode::engine::run(&$spec, input, in_len, $crate::transcode::engine::EndianMode::Fixed(false), flags, None)
        }
    };
}

pub(crate) use direction;
