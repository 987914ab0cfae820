//! Tag ↔ variant registries for closed unions.

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use selkie_utils::{ahash::RandomState, tracing};

use crate::{
    resolver::{TagResolver, VariantMeta},
    result::{Error, Result},
    union::{TaggedUnion, UnionInfo, VariantInfo},
};

/// A bijective mapping between tags and the variants of one union.
///
/// The registry is a pure function of the union description and the
/// resolver it was built with: building it twice from the same
/// inputs produces the same mapping. Once built it is immutable and
/// usually kept for the rest of the process, either in caller state
/// or behind a [`RegistryCell`].
#[derive(Debug)]
pub struct Registry<T: 'static> {
    union: &'static UnionInfo<T>,
    by_tag: IndexMap<String, usize, RandomState>,
}

impl<T: 'static> Registry<T> {
    /// Builds the registry for `union`, tagging every variant
    /// through `resolver`.
    ///
    /// Fails with [`Error::NotASumType`] when the union enumerates
    /// no variants, and with [`Error::DuplicateTag`] when two
    /// distinct variants resolve to the same tag. Collisions are
    /// detected here, at build time, so lookups never have to deal
    /// with ambiguity.
    pub fn build(union: &'static UnionInfo<T>, resolver: &dyn TagResolver) -> Result<Self> {
        if union.is_empty() {
            return Err(Error::NotASumType {
                union: union.name(),
            });
        }

        let mut by_tag: IndexMap<String, usize, RandomState> = IndexMap::default();
        for (index, variant) in union.variants().iter().enumerate() {
            let tag = resolver.resolve(&VariantMeta::new(union, variant, index));

            if let Some(&first) = by_tag.get(&tag) {
                return Err(Error::DuplicateTag {
                    union: union.name(),
                    tag,
                    first: union.variants()[first].name(),
                    second: variant.name(),
                });
            }

            by_tag.insert(tag, index);
        }

        tracing::debug!(
            union = union.name(),
            variants = union.len(),
            "built variant registry"
        );

        Ok(Self { union, by_tag })
    }

    /// Gets the union description this registry was built for.
    pub fn union(&self) -> &'static UnionInfo<T> {
        self.union
    }

    /// Gets the number of registered variants.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Checks whether the registry is empty.
    ///
    /// [`Registry::build`] rejects empty unions, so this only holds
    /// for registries that were never successfully built.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }

    /// Looks up the variant a tag resolves to.
    ///
    /// This is the decode-side direction of the mapping. Unknown
    /// tags fail with [`Error::UnknownVariant`].
    pub fn resolve_tag(&self, tag: &str) -> Result<&'static VariantInfo<T>> {
        self.by_tag
            .get(tag)
            .map(|&index| &self.union.variants()[index])
            .ok_or_else(|| Error::UnknownVariant {
                union: self.union.name(),
                tag: tag.to_owned(),
            })
    }

    /// Determines the variant of a live value and returns it with
    /// its tag.
    ///
    /// This is the encode-side direction. Every constructible value
    /// of the union must resolve; failure means the registered
    /// variant set is incomplete and surfaces as
    /// [`Error::UnresolvableVariant`].
    pub fn resolve_variant(&self, value: &T) -> Result<(&str, &'static VariantInfo<T>)> {
        for (tag, &index) in self.by_tag.iter() {
            let variant = &self.union.variants()[index];
            if (variant.matches())(value) {
                return Ok((tag.as_str(), variant));
            }
        }

        Err(Error::UnresolvableVariant {
            union: self.union.name(),
        })
    }

    /// Shorthand for the tag of [`Registry::resolve_variant`].
    pub fn tag_for(&self, value: &T) -> Result<&str> {
        self.resolve_variant(value).map(|(tag, _)| tag)
    }

    /// Iterates over `(tag, variant)` entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static VariantInfo<T>)> {
        self.by_tag
            .iter()
            .map(|(tag, &index)| (tag.as_str(), &self.union.variants()[index]))
    }
}

impl<T: TaggedUnion> Registry<T> {
    /// Builds the registry for `T`'s own union description.
    pub fn new(resolver: &dyn TagResolver) -> Result<Self> {
        Self::build(T::union_info(), resolver)
    }
}

/// A cell for one-time, lazily built registries.
///
/// Suitable for statics. When several threads race on the first
/// use, exactly one of them performs the build and the others block
/// until it completes, then observe the same finished registry; the
/// first successful build wins. A failed build leaves the cell
/// empty, so a later call may try again.
///
/// ```no_run
/// use selkie::{LocalName, Registry, RegistryCell, TaggedUnion};
/// # #[derive(Clone)] enum Toggle {}
/// # impl TaggedUnion for Toggle {
/// #     fn union_info() -> &'static selkie::UnionInfo<Self> { unimplemented!() }
/// # }
///
/// static TOGGLES: RegistryCell<Toggle> = RegistryCell::new();
///
/// fn registry() -> &'static Registry<Toggle> {
///     TOGGLES.get_or_build(&LocalName).expect("toggle tags collide")
/// }
/// ```
pub struct RegistryCell<T: 'static>(OnceCell<Registry<T>>);

impl<T: 'static> RegistryCell<T> {
    /// Creates a new, empty cell.
    pub const fn new() -> Self {
        Self(OnceCell::new())
    }

    /// Gets the registry if it was already built.
    pub fn get(&self) -> Option<&Registry<T>> {
        self.0.get()
    }
}

impl<T: TaggedUnion> RegistryCell<T> {
    /// Gets the registry, building it on first use.
    ///
    /// `resolver` is only consulted by the caller that performs the
    /// build.
    pub fn get_or_build(&self, resolver: &dyn TagResolver) -> Result<&Registry<T>> {
        self.0.get_or_try_init(|| Registry::new(resolver))
    }
}

impl<T> Default for RegistryCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
