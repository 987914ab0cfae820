//! Result and error types for registry construction and the codec.

use core::fmt::{self, Display};

/// A [`Result`][std::result::Result] produced by this crate's
/// operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error when building a registry or moving a value through the
/// codec fails.
///
/// Build-time failures ([`Error::NotASumType`],
/// [`Error::DuplicateTag`]) are configuration errors and surface
/// before any value is ever encoded. [`Error::UnresolvableVariant`]
/// and [`Error::MissingSingleton`] indicate an inconsistency between
/// the registered variant set and the values actually in flight.
/// The remaining cases are ordinary decode failures for data that
/// does not match the union.
#[derive(Debug)]
pub enum Error {
    /// The described type exposes no variants and therefore is not
    /// an enumerable sum type.
    NotASumType {
        /// Name of the union.
        union: &'static str,
    },
    /// Two distinct variants of one union resolved to the same tag.
    DuplicateTag {
        /// Name of the union.
        union: &'static str,
        /// The colliding tag.
        tag: String,
        /// Name of the variant that claimed the tag first.
        first: &'static str,
        /// Name of the variant that collided with it.
        second: &'static str,
    },
    /// A record carried a tag that no variant of the union resolves
    /// to.
    UnknownVariant {
        /// Name of the union.
        union: &'static str,
        /// The unrecognized tag.
        tag: String,
    },
    /// A value did not match any variant descriptor of its union.
    UnresolvableVariant {
        /// Name of the union.
        union: &'static str,
    },
    /// A record resolved to a different variant than the caller
    /// asked to decode into.
    VariantMismatch {
        /// Name of the union.
        union: &'static str,
        /// The variant the caller expected.
        expected: String,
        /// The tag actually found in the record.
        actual: String,
    },
    /// The canonical instance for a singleton variant could not be
    /// located.
    MissingSingleton {
        /// Name of the union.
        union: &'static str,
        /// Tag of the singleton variant.
        tag: String,
    },
    /// The record's structure does not fit the codec's expectations,
    /// independently of any particular variant.
    MalformedRecord {
        /// Name of the union.
        union: &'static str,
        /// Human-readable description of the defect.
        detail: String,
    },
    /// A record carried a field outside the variant's declared set.
    ///
    /// Only reported when
    /// [`CodecFlags::DENY_UNKNOWN_FIELDS`][crate::codec::CodecFlags::DENY_UNKNOWN_FIELDS]
    /// is configured.
    UnknownField {
        /// Name of the union.
        union: &'static str,
        /// Name of the resolved variant.
        variant: &'static str,
        /// The offending field.
        field: String,
    },
    /// The variant's own field conversion through serde failed.
    Payload {
        /// Name of the union.
        union: &'static str,
        /// Tag of the variant whose payload failed.
        tag: String,
        /// The underlying serde error.
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn malformed(union: &'static str, detail: impl Into<String>) -> Self {
        Error::MalformedRecord {
            union,
            detail: detail.into(),
        }
    }

    pub(crate) fn payload(union: &'static str, tag: &str, source: serde_json::Error) -> Self {
        Error::Payload {
            union,
            tag: tag.to_owned(),
            source,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotASumType { union } => {
                write!(f, "`{union}` does not enumerate any variants")
            }
            Error::DuplicateTag {
                union,
                tag,
                first,
                second,
            } => write!(
                f,
                "variants `{first}` and `{second}` of `{union}` both resolve to tag `{tag}`"
            ),
            Error::UnknownVariant { union, tag } => {
                write!(f, "unknown tag `{tag}` for `{union}`")
            }
            Error::UnresolvableVariant { union } => {
                write!(f, "value matches no registered variant of `{union}`")
            }
            Error::VariantMismatch {
                union,
                expected,
                actual,
            } => write!(
                f,
                "expected variant `{expected}` of `{union}`, found tag `{actual}`"
            ),
            Error::MissingSingleton { union, tag } => write!(
                f,
                "no canonical instance for singleton variant `{tag}` of `{union}`"
            ),
            Error::MalformedRecord { union, detail } => {
                write!(f, "malformed record for `{union}`: {detail}")
            }
            Error::UnknownField {
                union,
                variant,
                field,
            } => write!(
                f,
                "unknown field `{field}` in record for variant `{variant}` of `{union}`"
            ),
            Error::Payload { union, tag, source } => write!(
                f,
                "payload conversion for variant `{tag}` of `{union}` failed: {source}"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Payload { source, .. } => Some(source),
            _ => None,
        }
    }
}
