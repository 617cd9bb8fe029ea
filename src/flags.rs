use bitflags::bitflags;

bitflags! {
    /// Behavior flags accepted by every [`crate::transcode`] operation.
    ///
    /// Open for future flags per the spec: unrecognized bits are preserved and ignored rather than rejected.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Flags : u32 {
        /// Halt with [`crate::Status::BomForbidden`] if the input begins with a byte-order-mark, instead of skipping it.
        const FORBID_BOM        = 0b01;
        /// Halt with [`crate::Status::InvalidCodepoint`] on the first invalid scalar, instead of substituting U+FFFD.
        const STRICT_CODEPOINTS = 0b10;

        // unknown bits are intentionally preserved (not truncated) so callers compiled against a future
        // version of this crate that adds flags don't have them silently dropped by an older binary.
        const _ = !0;
    }
}
