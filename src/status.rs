#[cfg(feature = "std")] use std::error::Error;

use core::fmt::{self, Display, Formatter};



/// Outcome of a [`crate::transcode`] operation, or of the bounded byte-level helpers in [`crate::bytes`].
///
/// An open enumeration: new variants may be added in a future version, so match on this with a wildcard arm.
#[non_exhaustive]
#[repr(u32)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Status {
    /// The operation completed successfully.
    Success             = 0,
    /// The input span was null, or a multi-unit sequence was truncated (input ran out mid-sequence).
    InvalidArgument     = 1,
    /// The output buffer was too small to hold the result, including its terminator.
    NoSpace             = 2,
    /// A bounded byte copy/concatenate would have overflowed the destination capacity.
    Range               = 3,
    /// A byte-order-mark was present and [`crate::flags::Flags::FORBID_BOM`] was set.
    BomForbidden        = 4,
    /// [`crate::flags::Flags::STRICT_CODEPOINTS`] was set and an invalid scalar value was encountered.
    InvalidCodepoint    = 5,
}

impl Status {
    /// `true` for [`Status::Success`].
    pub const fn is_success(self) -> bool { matches!(self, Status::Success) }

    /// `true` for anything other than [`Status::Success`].
    pub const fn is_error(self) -> bool { !self.is_success() }
}

impl Display for Status {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(match self {
            Status::Success          => "operation completed successfully",
            Status::InvalidArgument  => "null input, or a truncated multi-unit sequence",
            Status::NoSpace          => "output buffer too small to hold the result and its terminator",
            Status::Range            => "bounded copy/concatenate would overflow the destination capacity",
            Status::BomForbidden     => "a byte-order-mark was present and forbidden",
            Status::InvalidCodepoint => "an invalid Unicode scalar value was encountered under strict codepoint checking",
        })
    }
}

#[cfg(feature = "std")]
impl Error for Status {}

/// The result of a [`crate::transcode`] `convert`/`measured_length` call.
///
/// Mirrors the distilled spec's `(status, outLen, inProcessed)` out-parameter triple as a plain return value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ConvertResult {
    /// Outcome of the call.
    pub status: Status,
    /// Destination code units written, excluding any trailing terminator. Valid even on failure (see field docs on individual failure modes in the spec).
    pub out_len: usize,
    /// Source code units fully consumed up to (but not including) the error site on failure, or the total source length on success.
    pub in_processed: usize,
}

impl ConvertResult {
    pub(crate) const fn ok(out_len: usize, in_processed: usize) -> Self {
        Self { status: Status::Success, out_len, in_processed }
    }

    pub(crate) const fn err(status: Status, out_len: usize, in_processed: usize) -> Self {
        Self { status, out_len, in_processed }
    }
}
