//! The driving loop shared by every direction: BOM handling, byte-order resolution, the
//! decode/encode loop, and terminator accounting. One copy of this logic backs all 72 generated
//! public functions in [`super`], rather than duplicating the loop per direction.

use crate::endian::{
    has_bom_utf16_be, has_bom_utf16_le, has_bom_utf32_be, has_bom_utf32_le, has_bom_utf8,
    host_is_little_endian,
};
use crate::flags::Flags;
use crate::scalar::REPLACEMENT_SCALAR;
use crate::status::{ConvertResult, Status};

use super::scalar_codec::{Decoded, DecodeFn, EncodeFn};
use super::Length;

/// Byte order governing a direction's source decode and destination encode.
pub(crate) enum EndianMode {
    /// Adopt a leading BOM's byte order for decoding; encode in native order. Used by the
    /// unsuffixed, BOM-driven function variants.
    Bom,
    /// Decode and encode under this fixed, caller-declared byte order regardless of any BOM
    /// present (a BOM is still detected, skipped, and subject to [`Flags::FORBID_BOM`]).
    Fixed(bool),
}

/// The per-direction behavior the engine is parameterized over.
pub(crate) struct DirectionSpec {
    pub src_width: usize,
    pub dst_width: usize,
    pub decode: DecodeFn,
    pub encode: EncodeFn,
    pub detect_bom: fn(&[u8]) -> Option<(bool, usize)>,
}

pub(crate) fn detect_bom_utf8(body: &[u8]) -> Option<(bool, usize)> {
    has_bom_utf8(body, body.len()).then(|| (host_is_little_endian(), 3))
}

pub(crate) fn detect_bom_utf16(body: &[u8]) -> Option<(bool, usize)> {
    if has_bom_utf16_le(body, body.len()) {
        Some((true, 1))
    } else if has_bom_utf16_be(body, body.len()) {
        Some((false, 1))
    } else {
        None
    }
}

pub(crate) fn detect_bom_utf32(body: &[u8]) -> Option<(bool, usize)> {
    // a UTF-32 LE BOM's leading two bytes alias a UTF-16 LE BOM; check the wider form first.
    if has_bom_utf32_le(body, body.len()) {
        Some((true, 1))
    } else if has_bom_utf32_be(body, body.len()) {
        Some((false, 1))
    } else {
        None
    }
}

/// Slice `input` down to its effective content, excluding any nul terminator.
///
/// For [`Length::Units`], the caller-declared unit count, clamped to what `input` actually holds.
/// For [`Length::NulTerminated`], the content up to (not including) the first all-zero unit, or
/// the whole (unit-rounded) buffer if none is found.
pub(crate) fn effective_span(input: &[u8], len: Length, unit_width: usize) -> &[u8] {
    match len {
        Length::Units(n) => {
            let want = n.saturating_mul(unit_width);
            &input[..want.min(input.len())]
        }
        Length::NulTerminated => {
            let mut i = 0;
            while i + unit_width <= input.len() {
                if input[i..i + unit_width].iter().all(|&b| b == 0) {
                    return &input[..i];
                }
                i += unit_width;
            }
            &input[..i]
        }
    }
}

/// Run one direction's convert-or-measure operation.
///
/// `out = None` is the measured-length mode: the destination loop still runs (so decode errors
/// are reported identically), but nothing is written and no [`Status::NoSpace`] check applies.
pub(crate) fn run(
    spec: &DirectionSpec,
    input: &[u8],
    in_len: Length,
    endian_mode: EndianMode,
    flags: Flags,
    mut out: Option<&mut [u8]>,
) -> ConvertResult {
    let out_cap_units = out.as_deref().map_or(0, |o| o.len() / spec.dst_width);

    let body_all = effective_span(input, in_len, spec.src_width);
    let bom = (spec.detect_bom)(body_all);

    if bom.is_some() && flags.contains(Flags::FORBID_BOM) {
        return ConvertResult::err(Status::BomForbidden, 0, 0);
    }

    let (skip_units, adopted_little) = match bom {
        Some((little, units)) => (units, Some(little)),
        None => (0, None),
    };
    let body = &body_all[skip_units * spec.src_width..];
    let body_units = body.len() / spec.src_width;

    let (src_little, dst_little) = match endian_mode {
        EndianMode::Fixed(b) => (b, b),
        EndianMode::Bom => (adopted_little.unwrap_or_else(host_is_little_endian), host_is_little_endian()),
    };

    let measuring = out.is_none();
    let mut pos = 0usize;
    let mut out_units = 0usize;
    let mut out_cursor = 0usize;

    while pos < body_units {
        let (value, consumed) = match (spec.decode)(body, pos, src_little) {
            Decoded::Truncated => {
                return ConvertResult::err(Status::InvalidArgument, out_units, skip_units + pos);
            }
            Decoded::Valid { value, consumed } => (value, consumed),
            Decoded::Invalid { consumed } => {
                if flags.contains(Flags::STRICT_CODEPOINTS) {
                    return ConvertResult::err(Status::InvalidCodepoint, out_units, skip_units + pos);
                }
                (REPLACEMENT_SCALAR, consumed)
            }
        };

        if let Some(out_buf) = out.as_deref_mut() {
            let remaining_units = out_cap_units.saturating_sub(out_units);
            match (spec.encode)(value, &mut out_buf[out_cursor..], remaining_units, dst_little) {
                Some(n) => {
                    out_units += n;
                    out_cursor += n * spec.dst_width;
                }
                None => return ConvertResult::err(Status::NoSpace, out_units, skip_units + pos),
            }
        } else {
            let mut scratch = [0u8; 8];
            let n = (spec.encode)(value, &mut scratch, 8, dst_little).expect("scratch buffer always large enough");
            out_units += n;
        }

        pos += consumed;
    }

    if !measuring {
        if out_cap_units < out_units + 1 {
            return ConvertResult::err(Status::NoSpace, out_units, skip_units + body_units);
        }
        let out_buf = out.as_deref_mut().expect("out is Some when not measuring");
        for k in 0..spec.dst_width {
            out_buf[out_cursor + k] = 0;
        }
    }

    ConvertResult::ok(out_units, skip_units + body_units)
}
