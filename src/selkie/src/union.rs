//! Descriptors for closed unions and their variants.
//!
//! A [`UnionInfo`] enumerates every variant of one sum type together
//! with the hooks the codec needs: a dynamic variant test, field
//! conversion in both directions and, for singleton variants, access
//! to the canonical process-wide instance. The set is closed once
//! [`UnionInfoBuilder::build`] runs; nothing can be added afterwards.

use crate::record::Fields;

/// Tests whether a value is an instance of the described variant.
pub type MatchFn<T> = fn(&T) -> bool;

/// Converts a value of the described variant into its own fields.
///
/// The returned record carries the variant's payload only; tag
/// handling is the codec's concern.
pub type EncodeFn<T> = fn(&T) -> serde_json::Result<Fields>;

/// Builds a fresh value of the described variant from its fields.
pub type DecodeFn<T> = fn(&Fields) -> serde_json::Result<T>;

/// Locates the canonical instance of a singleton variant.
///
/// Returning `None` reports that the instance cannot be found and
/// fails the decode with
/// [`Error::MissingSingleton`][crate::Error::MissingSingleton].
pub type CanonicalFn<T> = fn() -> Option<T>;

/// Moves the state of a freshly decoded throwaway instance onto the
/// canonical instance of a singleton variant.
///
/// The first argument is the canonical instance, the second the
/// fully parsed throwaway. Implementations for singletons without
/// mutable state simply drop the throwaway.
pub type AbsorbFn<T> = fn(&T, T);

/// Where the tag lives in a serialized record.
///
/// The placement is fixed per union at registration time; one union
/// never mixes both models.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TagPlacement {
    /// The tag is injected by the codec as the first field of the
    /// record, outside the variant's own fields.
    Wrapped,
    /// The tag is a genuine field of the variant's payload and keeps
    /// its declared position in the record.
    Inline,
}

/// A sum type whose variant set is closed and enumerable.
///
/// Implementations expose a process-lifetime [`UnionInfo`] for the
/// type, typically held in a `once_cell::sync::Lazy` static:
///
/// ```
/// use once_cell::sync::Lazy;
/// use selkie::{Fields, TaggedUnion, UnionInfo, VariantInfo};
///
/// #[derive(Clone)]
/// enum Toggle {
///     On,
///     Off,
/// }
///
/// static TOGGLE_INFO: Lazy<UnionInfo<Toggle>> = Lazy::new(|| {
///     UnionInfo::builder("Toggle")
///         .variant(VariantInfo::structured(
///             "On",
///             &[],
///             |v| matches!(v, Toggle::On),
///             |_| Ok(Fields::new()),
///             |_| Ok(Toggle::On),
///         ))
///         .variant(VariantInfo::structured(
///             "Off",
///             &[],
///             |v| matches!(v, Toggle::Off),
///             |_| Ok(Fields::new()),
///             |_| Ok(Toggle::Off),
///         ))
///         .build()
/// });
///
/// impl TaggedUnion for Toggle {
///     fn union_info() -> &'static UnionInfo<Self> {
///         &TOGGLE_INFO
///     }
/// }
/// ```
pub trait TaggedUnion: Sized + 'static {
    /// Gets the variant set descriptor for this union.
    fn union_info() -> &'static UnionInfo<Self>;
}

/// Which kind of variant a [`VariantInfo`] describes.
#[derive(Debug)]
pub enum VariantKind<T> {
    /// An ordinary variant carrying zero or more named fields.
    Structured,
    /// A variant with exactly one logical instance per process.
    Singleton {
        /// Locates the canonical instance.
        canonical: CanonicalFn<T>,
        /// Restores decoded state onto the canonical instance.
        absorb: AbsorbFn<T>,
    },
}

/// Description of one variant in a [`UnionInfo`].
#[derive(Debug)]
pub struct VariantInfo<T> {
    name: &'static str,
    fields: &'static [&'static str],
    kind: VariantKind<T>,

    is: MatchFn<T>,
    encode: EncodeFn<T>,
    decode: DecodeFn<T>,
}

impl<T> VariantInfo<T> {
    /// Creates the descriptor for a structured variant.
    ///
    /// `fields` lists the payload's field names in declaration
    /// order. `is` must return `true` exactly for values of this
    /// variant, and `encode`/`decode` convert the payload to and
    /// from its field record.
    pub fn structured(
        name: &'static str,
        fields: &'static [&'static str],
        is: MatchFn<T>,
        encode: EncodeFn<T>,
        decode: DecodeFn<T>,
    ) -> Self {
        Self {
            name,
            fields,
            kind: VariantKind::Structured,
            is,
            encode,
            decode,
        }
    }

    /// Creates the descriptor for a singleton variant.
    ///
    /// `decode` builds a throwaway instance used for validation; the
    /// codec then locates the canonical instance through `canonical`,
    /// hands the throwaway to `absorb` and returns the canonical
    /// instance to the caller.
    pub fn singleton(
        name: &'static str,
        fields: &'static [&'static str],
        is: MatchFn<T>,
        encode: EncodeFn<T>,
        decode: DecodeFn<T>,
        canonical: CanonicalFn<T>,
        absorb: AbsorbFn<T>,
    ) -> Self {
        Self {
            name,
            fields,
            kind: VariantKind::Singleton { canonical, absorb },
            is,
            encode,
            decode,
        }
    }

    /// Gets the variant's local name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the payload's field names in declaration order.
    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    /// Gets the kind of the variant.
    pub fn kind(&self) -> &VariantKind<T> {
        &self.kind
    }

    /// Checks whether this is a singleton variant.
    pub fn is_singleton(&self) -> bool {
        matches!(self.kind, VariantKind::Singleton { .. })
    }

    pub(crate) fn matches(&self) -> MatchFn<T> {
        self.is
    }

    pub(crate) fn encode(&self) -> EncodeFn<T> {
        self.encode
    }

    pub(crate) fn decode(&self) -> DecodeFn<T> {
        self.decode
    }
}

/// The full variant set of one closed union.
///
/// Built once through [`UnionInfo::builder`], immutable afterwards
/// and alive for the rest of the process. The tag field name and the
/// [`TagPlacement`] are part of the union description, so every
/// record of one union shares the same shape.
#[derive(Debug)]
pub struct UnionInfo<T> {
    name: &'static str,
    tag_field: &'static str,
    placement: TagPlacement,
    variants: Vec<VariantInfo<T>>,
}

impl<T> UnionInfo<T> {
    /// Starts describing a union with the given name.
    ///
    /// The tag field defaults to `"tag"` and the placement to
    /// [`TagPlacement::Wrapped`].
    pub fn builder(name: &'static str) -> UnionInfoBuilder<T> {
        UnionInfoBuilder {
            name,
            tag_field: "tag",
            placement: TagPlacement::Wrapped,
            variants: Vec::new(),
        }
    }

    /// Gets the union's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the name of the record field holding the tag.
    pub fn tag_field(&self) -> &'static str {
        self.tag_field
    }

    /// Gets the union's tag placement.
    pub fn placement(&self) -> TagPlacement {
        self.placement
    }

    /// Gets the descriptors of all variants in declaration order.
    pub fn variants(&self) -> &[VariantInfo<T>] {
        &self.variants
    }

    /// Gets the number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Checks whether the union enumerates no variants at all.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Builder for [`UnionInfo`], see [`UnionInfo::builder`].
pub struct UnionInfoBuilder<T> {
    name: &'static str,
    tag_field: &'static str,
    placement: TagPlacement,
    variants: Vec<VariantInfo<T>>,
}

impl<T> UnionInfoBuilder<T> {
    /// Overrides the name of the record field holding the tag.
    pub fn tag_field(mut self, field: &'static str) -> Self {
        self.tag_field = field;
        self
    }

    /// Overrides the union's tag placement.
    pub fn placement(mut self, placement: TagPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Adds a variant to the set.
    pub fn variant(mut self, variant: VariantInfo<T>) -> Self {
        self.variants.push(variant);
        self
    }

    /// Closes the variant set and produces the final description.
    pub fn build(self) -> UnionInfo<T> {
        UnionInfo {
            name: self.name,
            tag_field: self.tag_field,
            placement: self.placement,
            variants: self.variants,
        }
    }
}
