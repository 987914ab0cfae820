//! Tagged serialization for closed sum types.
//!
//! Selkie round-trips the variants of a closed union through
//! self-describing JSON records. Every record carries a string tag
//! identifying the variant it was encoded from, so a value can be
//! reconstructed without any out-of-band type information. Singleton
//! variants decode back to their canonical process-wide instance
//! instead of a fresh copy.
//!
//! The building blocks:
//!
//! - [`UnionInfo`] describes a union's full variant set. It is built
//!   once through [`UnionInfo::builder`] and exposed via the
//!   [`TaggedUnion`] trait.
//! - A [`TagResolver`] maps every variant descriptor to its tag.
//! - [`Registry`] applies a resolver to a union and holds the
//!   resulting bijection between tags and variants.
//! - [`codec::Encoder`] and [`codec::Decoder`] move values between
//!   the union and tagged [`Fields`] records, delegating the
//!   field-level work to serde.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;

mod record;
pub use record::{from_fields, to_fields, Fields};

mod registry;
pub use registry::{Registry, RegistryCell};

mod resolver;
pub use resolver::{HashedName, LocalName, TagResolver, TagTable, VariantMeta};

mod result;
pub use result::{Error, Result};

mod singleton;

mod union;
pub use union::{
    AbsorbFn, CanonicalFn, DecodeFn, EncodeFn, MatchFn, TagPlacement, TaggedUnion, UnionInfo,
    UnionInfoBuilder, VariantInfo, VariantKind,
};
