//! A Unicode transcoding engine (UTF-8/UTF-16/UTF-32, endian-aware, BOM-aware) and a
//! length-prefixed, heap-allocated mutable byte string.
//!
//! The transcoder lives in [`transcode`]: every one of the nine `{utf8,utf16,utf32} -> {utf8,
//! utf16,utf32}` directions, each with unsuffixed (byte-order-mark-driven), `_ne`, `_le`, and
//! `_be` variants, plus a `_len` counterpart of each that measures without writing. [`bytes`]
//! holds smaller byte-level helpers (whitespace trimming, line splitting, bounded copy and
//! concatenate, integer formatting) that the transcoder and [`dynstring`] both build on.
//!
//! This crate is `#![no_std]`. The `alloc` feature enables [`dynstring::DString`]; `std` (the
//! default) enables `alloc` plus [`Status`]'s [`std::error::Error`] impl. The optional
//! `widestring` feature adds [`wide`], a thin interop layer onto `widestring`'s typed wide-string
//! views.
#![no_std]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod endian;
mod scalar;
mod status;
mod unit;

pub mod bytes;
pub mod flags;
pub mod transcode;

#[cfg(feature = "alloc")]
pub mod dynstring;

#[cfg(feature = "widestring")]
pub mod wide;

pub use endian::{host_is_little_endian, Endian};
pub use flags::Flags;
pub use status::{ConvertResult, Status};
pub use unit::Unit;

#[cfg(feature = "alloc")]
pub use dynstring::DString;
