//! Canonicalization of singleton variants during decode.
//!
//! Deserializing a singleton never hands out a fresh instance.
//! The record's fields are first parsed into a throwaway value by
//! the variant's normal field codec, which validates them in full;
//! only then is the throwaway's state moved onto the canonical
//! process-wide instance, and the canonical instance itself is what
//! the caller receives. "Decode" for a singleton therefore means
//! "restore shared state", and a parse failure surfaces before any
//! shared state was touched.
//!
//! Synchronizing the shared state against concurrent readers is the
//! caller's responsibility; the guard takes no lock of its own.

use crate::{
    result::{Error, Result},
    union::{AbsorbFn, CanonicalFn},
};

/// Decode-side guard for one singleton value.
///
/// A freshly parsed value starts out [`Unwrapped`][Guard::Unwrapped]
/// and is transitioned to [`Canonicalized`][Guard::Canonicalized]
/// unconditionally at the end of the decode — never partially.
pub(crate) enum Guard<T> {
    /// Freshly parsed from the record; not yet visible to the caller.
    Unwrapped(T),
    /// Replaced by the canonical shared instance.
    Canonicalized(T),
}

impl<T> Guard<T> {
    pub(crate) fn new(value: T) -> Self {
        Guard::Unwrapped(value)
    }

    /// Runs the canonicalization transition.
    ///
    /// Locates the canonical instance, moves the throwaway's state
    /// onto it through `absorb` and keeps the canonical instance.
    /// Fails with [`Error::MissingSingleton`] when no canonical
    /// instance can be found; already canonicalized guards pass
    /// through unchanged.
    pub(crate) fn canonicalize(
        self,
        union: &'static str,
        tag: &str,
        canonical: CanonicalFn<T>,
        absorb: AbsorbFn<T>,
    ) -> Result<Self> {
        let fresh = match self {
            Guard::Unwrapped(value) => value,
            done @ Guard::Canonicalized(_) => return Ok(done),
        };

        let instance = canonical().ok_or_else(|| Error::MissingSingleton {
            union,
            tag: tag.to_owned(),
        })?;

        absorb(&instance, fresh);

        Ok(Guard::Canonicalized(instance))
    }

    pub(crate) fn into_value(self) -> T {
        match self {
            Guard::Unwrapped(value) | Guard::Canonicalized(value) => value,
        }
    }
}
