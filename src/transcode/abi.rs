//! Raw-pointer `extern "C"` shim mirroring the distilled spec's literal C-style signature.
//!
//! This is additive, not a replacement for the safe API in [`super`]: the whole reason this crate
//! (like its teacher) exists is to be usable from a C caller or an FFI boundary that only has
//! pointers and lengths to work with. Every function here does the minimal unsafe work of turning
//! raw pointers into Rust slices, then immediately hands off to the safe functions in [`super`].

use core::slice;

use crate::{ConvertResult, Flags, Status};
use super::Length;

/// Byte-order selection for the C ABI, since a raw `extern "C"` function can't carry four
/// differently-named variants the way the safe API does.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CEndian {
    /// Adopt a leading byte-order-mark's order; otherwise native. See the unsuffixed safe functions.
    Bom = 0,
    /// Host-native byte order. See the `_ne` safe functions.
    Native = 1,
    /// Little-endian, regardless of host order. See the `_le` safe functions.
    Little = 2,
    /// Big-endian, regardless of host order. See the `_be` safe functions.
    Big = 3,
}

/// Sentinel passed as `in_len` to mean "nul-terminated": read until the first all-zero source
/// code unit, same convention the distilled spec's C signature used.
pub const NUL_TERMINATED: usize = usize::MAX;

/// Resolve a raw `(ptr, len)` pair into a Rust slice and a [`Length`].
///
/// # Safety
/// `ptr` must be null, or valid for reads of at least `len` source code units of `unit_width`
/// bytes each (or, if `len == NUL_TERMINATED`, valid for reads up to and including the first
/// all-zero unit).
unsafe fn resolve_input<'a>(ptr: *const u8, len: usize, unit_width: usize) -> Option<(&'a [u8], Length)> {
    if ptr.is_null() {
        return None;
    }
    if len == NUL_TERMINATED {
        let mut i = 0usize;
        loop {
            let mut is_zero = true;
            for k in 0..unit_width {
                if unsafe { *ptr.add(i + k) } != 0 {
                    is_zero = false;
                    break;
                }
            }
            if is_zero {
                break;
            }
            i += unit_width;
        }
        Some((unsafe { slice::from_raw_parts(ptr, i) }, Length::Units(i / unit_width)))
    } else {
        let bytes = len.saturating_mul(unit_width);
        Some((unsafe { slice::from_raw_parts(ptr, bytes) }, Length::Units(len)))
    }
}

unsafe fn resolve_output<'a>(ptr: *mut u8, cap_bytes: usize) -> Option<&'a mut [u8]> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { slice::from_raw_parts_mut(ptr, cap_bytes) })
    }
}

fn write_result(r: ConvertResult, out_len: *mut usize, in_processed: *mut usize) -> u32 {
    unsafe {
        if !out_len.is_null() {
            *out_len = r.out_len;
        }
        if !in_processed.is_null() {
            *in_processed = r.in_processed;
        }
    }
    r.status as u32
}

macro_rules! c_direction {
    (
        $convert_name:ident, $len_name:ident,
        $bom:path, $ne:path, $le:path, $be:path,
        $len_bom:path, $len_ne:path, $len_le:path, $len_be:path,
        $src_width:expr
    ) => {
        /// # Safety
        /// See [`resolve_input`] and [`resolve_output`] for the pointer validity requirements.
        #[no_mangle]
        pub unsafe extern "C" fn $convert_name(
            input: *const u8,
            in_len: usize,
            endian: CEndian,
            flags: u32,
            out: *mut u8,
            out_cap_bytes: usize,
            out_len: *mut usize,
            in_processed: *mut usize,
        ) -> u32 {
            let flags = Flags::from_bits_retain(flags);
            let Some((input, len)) = (unsafe { resolve_input(input, in_len, $src_width) }) else {
                return write_result(ConvertResult::err(Status::InvalidArgument, 0, 0), out_len, in_processed);
            };
            let Some(out) = (unsafe { resolve_output(out, out_cap_bytes) }) else {
                return write_result(ConvertResult::err(Status::InvalidArgument, 0, 0), out_len, in_processed);
            };
            let r = match endian {
                CEndian::Bom => $bom(input, len, flags, out),
                CEndian::Native => $ne(input, len, flags, out),
                CEndian::Little => $le(input, len, flags, out),
                CEndian::Big => $be(input, len, flags, out),
            };
            write_result(r, out_len, in_processed)
        }

        /// # Safety
        /// See [`resolve_input`] for the pointer validity requirements.
        #[no_mangle]
        pub unsafe extern "C" fn $len_name(
            input: *const u8,
            in_len: usize,
            endian: CEndian,
            flags: u32,
            out_len: *mut usize,
            in_processed: *mut usize,
        ) -> u32 {
            let flags = Flags::from_bits_retain(flags);
            let Some((input, len)) = (unsafe { resolve_input(input, in_len, $src_width) }) else {
                return write_result(ConvertResult::err(Status::InvalidArgument, 0, 0), out_len, in_processed);
            };
            let r = match endian {
                CEndian::Bom => $len_bom(input, len, flags),
                CEndian::Native => $len_ne(input, len, flags),
                CEndian::Little => $len_le(input, len, flags),
                CEndian::Big => $len_be(input, len, flags),
            };
            write_result(r, out_len, in_processed)
        }
    };
}

c_direction!(
    unistr_utf8_to_utf8, unistr_utf8_to_utf8_len,
    super::utf8_to_utf8, super::utf8_to_utf8_ne, super::utf8_to_utf8_le, super::utf8_to_utf8_be,
    super::utf8_to_utf8_len, super::utf8_to_utf8_ne_len, super::utf8_to_utf8_le_len, super::utf8_to_utf8_be_len,
    1
);

c_direction!(
    unistr_utf8_to_utf16, unistr_utf8_to_utf16_len,
    super::utf8_to_utf16, super::utf8_to_utf16_ne, super::utf8_to_utf16_le, super::utf8_to_utf16_be,
    super::utf8_to_utf16_len, super::utf8_to_utf16_ne_len, super::utf8_to_utf16_le_len, super::utf8_to_utf16_be_len,
    1
);

c_direction!(
    unistr_utf8_to_utf32, unistr_utf8_to_utf32_len,
    super::utf8_to_utf32, super::utf8_to_utf32_ne, super::utf8_to_utf32_le, super::utf8_to_utf32_be,
    super::utf8_to_utf32_len, super::utf8_to_utf32_ne_len, super::utf8_to_utf32_le_len, super::utf8_to_utf32_be_len,
    1
);

c_direction!(
    unistr_utf16_to_utf8, unistr_utf16_to_utf8_len,
    super::utf16_to_utf8, super::utf16_to_utf8_ne, super::utf16_to_utf8_le, super::utf16_to_utf8_be,
    super::utf16_to_utf8_len, super::utf16_to_utf8_ne_len, super::utf16_to_utf8_le_len, super::utf16_to_utf8_be_len,
    2
);

c_direction!(
    unistr_utf16_to_utf16, unistr_utf16_to_utf16_len,
    super::utf16_to_utf16, super::utf16_to_utf16_ne, super::utf16_to_utf16_le, super::utf16_to_utf16_be,
    super::utf16_to_utf16_len, super::utf16_to_utf16_ne_len, super::utf16_to_utf16_le_len, super::utf16_to_utf16_be_len,
    2
);

c_direction!(
    unistr_utf16_to_utf32, unistr_utf16_to_utf32_len,
    super::utf16_to_utf32, super::utf16_to_utf32_ne, super::utf16_to_utf32_le, super::utf16_to_utf32_be,
    super::utf16_to_utf32_len, super::utf16_to_utf32_ne_len, super::utf16_to_utf32_le_len, super::utf16_to_utf32_be_len,
    2
);

c_direction!(
    unistr_utf32_to_utf8, unistr_utf32_to_utf8_len,
    super::utf32_to_utf8, super::utf32_to_utf8_ne, super::utf32_to_utf8_le, super::utf32_to_utf8_be,
    super::utf32_to_utf8_len, super::utf32_to_utf8_ne_len, super::utf32_to_utf8_le_len, super::utf32_to_utf8_be_len,
    4
);

c_direction!(
    unistr_utf32_to_utf16, unistr_utf32_to_utf16_len,
    super::utf32_to_utf16, super::utf32_to_utf16_ne, super::utf32_to_utf16_le, super::utf32_to_utf16_be,
    super::utf32_to_utf16_len, super::utf32_to_utf16_ne_len, super::utf32_to_utf16_le_len, super::utf32_to_utf16_be_len,
    4
);

c_direction!(
    unistr_utf32_to_utf32, unistr_utf32_to_utf32_len,
    super::utf32_to_utf32, super::utf32_to_utf32_ne, super::utf32_to_utf32_le, super::utf32_to_utf32_be,
    super::utf32_to_utf32_len, super::utf32_to_utf32_ne_len, super::utf32_to_utf32_le_len, super::utf32_to_utf32_be_len,
    4
);
