use selkie_utils::tracing;
use serde_json::Value;

use super::{CodecFlags, Config};
use crate::{
    record::{value_kind, Fields},
    registry::Registry,
    result::{Error, Result},
    singleton::Guard,
    union::{TagPlacement, VariantInfo, VariantKind},
};

/// Decodes tagged records back into union values.
///
/// Dispatch happens on the record's tag field alone: the tag is
/// resolved through the registry, the matching variant's field codec
/// rebuilds the payload and singleton variants are replaced by their
/// canonical instance before the value is handed out.
pub struct Decoder<'a, T: 'static> {
    registry: &'a Registry<T>,
    config: Config,
}

impl<'a, T: 'static> Decoder<'a, T> {
    /// Creates a decoder with default configuration.
    pub fn new(registry: &'a Registry<T>) -> Self {
        Self::with_config(registry, Config::default())
    }

    /// Creates a decoder from the given [`Config`].
    pub fn with_config(registry: &'a Registry<T>, config: Config) -> Self {
        Self { registry, config }
    }

    /// Decodes a single record.
    ///
    /// The record must be a JSON object whose tag field resolves to
    /// a variant of this decoder's union; unknown tags fail with
    /// [`Error::UnknownVariant`].
    pub fn decode(&self, value: &Value) -> Result<T> {
        self.decode_record(self.as_record(value)?)
    }

    /// Decodes a single field record.
    pub fn decode_record(&self, record: &Fields) -> Result<T> {
        let (tag, variant) = self.read_tag(record)?;
        self.decode_variant(record, tag, variant)
    }

    /// Decodes a record that must be of one specific variant.
    ///
    /// The record's tag is still read and resolved; if it names any
    /// variant other than `expected`, the decode fails with
    /// [`Error::VariantMismatch`] instead of silently producing a
    /// value of the wrong case.
    pub fn decode_expecting(&self, value: &Value, expected: &str) -> Result<T> {
        let record = self.as_record(value)?;
        let (tag, variant) = self.read_tag(record)?;

        if variant.name() != expected {
            return Err(Error::VariantMismatch {
                union: self.registry.union().name(),
                expected: expected.to_owned(),
                actual: tag.to_owned(),
            });
        }

        self.decode_variant(record, tag, variant)
    }

    /// Decodes a JSON array of tagged records.
    pub fn decode_all(&self, value: &Value) -> Result<Vec<T>> {
        let union = self.registry.union();
        let elements = value.as_array().ok_or_else(|| {
            Error::malformed(
                union.name(),
                format!("expected a sequence of records, got {}", value_kind(value)),
            )
        })?;

        elements.iter().map(|element| self.decode(element)).collect()
    }

    fn as_record<'v>(&self, value: &'v Value) -> Result<&'v Fields> {
        value.as_object().ok_or_else(|| {
            Error::malformed(
                self.registry.union().name(),
                format!("expected an object record, got {}", value_kind(value)),
            )
        })
    }

    fn read_tag<'r>(&self, record: &'r Fields) -> Result<(&'r str, &'static VariantInfo<T>)> {
        let union = self.registry.union();

        let tag = record.get(union.tag_field()).ok_or_else(|| {
            Error::malformed(
                union.name(),
                format!("record is missing the tag field `{}`", union.tag_field()),
            )
        })?;
        let tag = tag.as_str().ok_or_else(|| {
            Error::malformed(
                union.name(),
                format!(
                    "tag field `{}` holds {}, not a string",
                    union.tag_field(),
                    value_kind(tag)
                ),
            )
        })?;

        let variant = self.registry.resolve_tag(tag)?;

        Ok((tag, variant))
    }

    fn decode_variant(
        &self,
        record: &Fields,
        tag: &str,
        variant: &'static VariantInfo<T>,
    ) -> Result<T> {
        let union = self.registry.union();

        if self.config.flags.contains(CodecFlags::DENY_UNKNOWN_FIELDS) {
            for field in record.keys() {
                if field != union.tag_field() && !variant.fields().contains(&field.as_str()) {
                    return Err(Error::UnknownField {
                        union: union.name(),
                        variant: variant.name(),
                        field: field.clone(),
                    });
                }
            }
        }

        let value = match union.placement() {
            // The tag was injected around the payload's own fields,
            // so it is stripped before the field codec runs.
            TagPlacement::Wrapped => {
                let mut body = record.clone();
                body.remove(union.tag_field());
                (variant.decode())(&body)
            }
            // Inline tags are genuine payload fields and stay put.
            TagPlacement::Inline => (variant.decode())(record),
        }
        .map_err(|e| Error::payload(union.name(), tag, e))?;

        let value = match variant.kind() {
            VariantKind::Structured => value,
            VariantKind::Singleton { canonical, absorb } => Guard::new(value)
                .canonicalize(union.name(), tag, *canonical, *absorb)?
                .into_value(),
        };

        tracing::trace!(union = union.name(), tag, "decoded variant record");

        Ok(value)
    }
}
