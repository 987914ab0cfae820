use selkie_utils::tracing;
use serde_json::Value;

use super::{CodecFlags, Config};
use crate::{
    record::Fields,
    registry::Registry,
    result::{Error, Result},
    union::TagPlacement,
};

/// Encodes union values into tagged records.
///
/// The encoder determines a value's variant dynamically through the
/// registry, converts the payload to its fields and places the tag
/// according to the union's [`TagPlacement`].
pub struct Encoder<'a, T: 'static> {
    registry: &'a Registry<T>,
    config: Config,
}

impl<'a, T: 'static> Encoder<'a, T> {
    /// Creates an encoder with default configuration.
    pub fn new(registry: &'a Registry<T>) -> Self {
        Self::with_config(registry, Config::default())
    }

    /// Creates an encoder from the given [`Config`].
    pub fn with_config(registry: &'a Registry<T>, config: Config) -> Self {
        Self { registry, config }
    }

    /// Encodes a single value into its field record.
    pub fn encode_record(&self, value: &T) -> Result<Fields> {
        let union = self.registry.union();
        let (tag, variant) = self.registry.resolve_variant(value)?;

        let payload =
            (variant.encode())(value).map_err(|e| Error::payload(union.name(), tag, e))?;

        let record = match union.placement() {
            TagPlacement::Wrapped => {
                // The tag field belongs to the codec here; a payload
                // that also emits it would store the tag twice.
                if payload.contains_key(union.tag_field()) {
                    return Err(Error::malformed(
                        union.name(),
                        format!(
                            "payload of variant `{}` emits the reserved tag field `{}`",
                            variant.name(),
                            union.tag_field()
                        ),
                    ));
                }

                let mut record = Fields::new();
                record.insert(
                    union.tag_field().to_owned(),
                    Value::String(tag.to_owned()),
                );
                record.extend(payload);
                record
            }
            TagPlacement::Inline => {
                let mut record = payload;
                let stored = record
                    .get(union.tag_field())
                    .and_then(Value::as_str)
                    .map(str::to_owned);

                // The payload's own string tag is kept when it agrees
                // with the registry, or when the caller opted into
                // trusting it outright.
                let keep_stored = stored.as_deref() == Some(tag)
                    || (stored.is_some()
                        && self.config.flags.contains(CodecFlags::KEEP_INLINE_TAG));

                if !keep_stored {
                    if let Some(stored) = &stored {
                        tracing::warn!(
                            union = union.name(),
                            derived = tag,
                            stored = stored.as_str(),
                            "inline tag disagrees with the naming strategy, \
                             storing the derived tag"
                        );
                    }
                    record.insert(
                        union.tag_field().to_owned(),
                        Value::String(tag.to_owned()),
                    );
                }

                record
            }
        };

        tracing::trace!(union = union.name(), tag, "encoded variant record");

        Ok(record)
    }

    /// Encodes a single value into a JSON object.
    pub fn encode(&self, value: &T) -> Result<Value> {
        self.encode_record(value).map(Value::Object)
    }

    /// Encodes a sequence of values into a JSON array, one tagged
    /// record per element.
    ///
    /// The element type is this encoder's union, so every element
    /// carries its tag regardless of which variants appear.
    pub fn encode_all<'v, I>(&self, values: I) -> Result<Value>
    where
        I: IntoIterator<Item = &'v T>,
        T: 'v,
    {
        let records = values
            .into_iter()
            .map(|value| self.encode(value))
            .collect::<Result<Vec<_>>>()?;

        Ok(Value::Array(records))
    }
}
