//! Encoding and decoding of union values as tagged records.
//!
//! The codec sits between a [`Registry`][crate::Registry] and the
//! serde-backed field conversion of the individual variants: it
//! determines tags, places them in the record according to the
//! union's [`TagPlacement`][crate::TagPlacement] and dispatches
//! decoding by the tag found in incoming records.
//!
//! # Tags and static type information
//!
//! A tag is only ever emitted by an [`Encoder`], which carries its
//! union's identity in its type. Sequences encoded through
//! [`Encoder::encode_all`] get a tag on every element for the same
//! reason. Serializing payload values through serde directly — any
//! path that does not know which union the values belong to — emits
//! plain, untagged records. That is a boundary of the design, not a
//! defect, and such records cannot be decoded back through a
//! [`Decoder`].

use bitflags::bitflags;

mod decode;
pub use decode::Decoder;

mod encode;
pub use encode::Encoder;

bitflags! {
    /// Behavior switches for [`Encoder`] and [`Decoder`].
    pub struct CodecFlags: u32 {
        /// Reject record fields outside the resolved variant's
        /// declared field set during decode.
        const DENY_UNKNOWN_FIELDS = 1 << 0;
        /// With inline placement, keep the payload's own tag field
        /// value when it disagrees with the registry's resolution.
        ///
        /// Without this flag the registry's derived tag wins and the
        /// disagreement is logged, which keeps encoded output
        /// reproducible from the naming strategy alone.
        const KEEP_INLINE_TAG = 1 << 1;
    }
}

/// Configuration shared by [`Encoder`] and [`Decoder`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// The configured behavior switches.
    pub flags: CodecFlags,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flags: CodecFlags::empty(),
        }
    }
}
