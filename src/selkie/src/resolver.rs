//! Pluggable naming strategies for variant tags.
//!
//! A [`TagResolver`] turns a variant descriptor into the tag stored
//! in serialized records. The codec bakes no strategy in; a resolver
//! is always supplied when a [`Registry`][crate::Registry] is built.
//! Any deterministic function that is injective within one union's
//! variant set is a valid strategy — collisions are rejected at
//! build time, never at first lookup.

use std::collections::HashMap;

use selkie_utils::{ahash::RandomState, hash::djb2};

use crate::union::{UnionInfo, VariantInfo};

/// A view of one variant's descriptor, handed to resolvers.
///
/// Tags are scoped to the enclosing union: two unrelated unions may
/// resolve variants to the same tag without conflict, which is why
/// the union's name is part of the view.
#[derive(Clone, Copy, Debug)]
pub struct VariantMeta<'a> {
    union: &'a str,
    name: &'a str,
    index: usize,
    fields: &'a [&'static str],
    singleton: bool,
}

impl<'a> VariantMeta<'a> {
    pub(crate) fn new<T>(union: &'a UnionInfo<T>, variant: &'a VariantInfo<T>, index: usize) -> Self {
        Self {
            union: union.name(),
            name: variant.name(),
            index,
            fields: variant.fields(),
            singleton: variant.is_singleton(),
        }
    }

    /// Gets the name of the enclosing union.
    pub fn union(&self) -> &'a str {
        self.union
    }

    /// Gets the variant's local name, without any enclosing-scope
    /// qualification.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Gets the variant's position in the union's declaration order.
    ///
    /// Deriving tags from this index is only sound when the
    /// declaration order itself is guaranteed stable, which nothing
    /// here enforces.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Gets the payload's field names in declaration order.
    pub fn fields(&self) -> &'a [&'static str] {
        self.fields
    }

    /// Checks whether the variant is a singleton.
    pub fn is_singleton(&self) -> bool {
        self.singleton
    }
}

/// A naming strategy mapping variant descriptors to tags.
///
/// Implementations must be deterministic and total over the variant
/// set they are used with. Plain functions and non-capturing
/// closures implement this trait directly.
pub trait TagResolver {
    /// Produces the tag for the described variant.
    fn resolve(&self, variant: &VariantMeta<'_>) -> String;
}

impl<F> TagResolver for F
where
    F: Fn(&VariantMeta<'_>) -> String,
{
    fn resolve(&self, variant: &VariantMeta<'_>) -> String {
        self(variant)
    }
}

/// Derives the tag from the variant's local name.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalName;

impl TagResolver for LocalName {
    fn resolve(&self, variant: &VariantMeta<'_>) -> String {
        variant.name().to_owned()
    }
}

/// Maps variant names to explicit per-variant tag constants.
///
/// Variants without an entry fall back to their local name, keeping
/// the strategy total over any variant set.
#[derive(Clone, Debug, Default)]
pub struct TagTable {
    entries: HashMap<&'static str, &'static str, RandomState>,
}

impl TagTable {
    /// Creates a table from `(variant name, tag)` pairs.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

impl TagResolver for TagTable {
    fn resolve(&self, variant: &VariantMeta<'_>) -> String {
        self.entries
            .get(variant.name())
            .copied()
            .unwrap_or_else(|| variant.name())
            .to_owned()
    }
}

/// Derives compact tags by hashing the variant's local name.
///
/// The tag is the zero-padded hex form of the name's
/// [`djb2`] hash. Collisions within one union are caught when the
/// registry is built.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashedName;

impl TagResolver for HashedName {
    fn resolve(&self, variant: &VariantMeta<'_>) -> String {
        format!("{:08x}", djb2(variant.name()))
    }
}
