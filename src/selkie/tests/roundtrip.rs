mod common;

use common::{sample_a, sample_b, shape_registry, Shape};
use selkie::{
    codec::{CodecFlags, Config, Decoder, Encoder},
    Error,
};
use serde_json::json;

#[test]
fn literal_encodings() {
    let encoder = Encoder::new(shape_registry());

    let a = encoder.encode(&sample_a()).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        r#"{"tag":"A","name":"Class A"}"#
    );

    let b = encoder.encode(&sample_b()).unwrap();
    assert_eq!(
        serde_json::to_string(&b).unwrap(),
        r#"{"tag":"B","name":3.14,"age":23}"#
    );

    let c = encoder.encode(&Shape::C).unwrap();
    assert_eq!(serde_json::to_string(&c).unwrap(), r#"{"tag":"C"}"#);
}

#[test]
fn roundtrip_every_variant() {
    let encoder = Encoder::new(shape_registry());
    let decoder = Decoder::new(shape_registry());

    for value in [sample_a(), sample_b(), Shape::C] {
        let record = encoder.encode(&value).unwrap();
        assert_eq!(decoder.decode(&record).unwrap(), value);
    }
}

#[test]
fn decode_into_specific_variant() {
    let encoder = Encoder::new(shape_registry());
    let decoder = Decoder::new(shape_registry());

    let record = encoder.encode(&sample_a()).unwrap();
    assert_eq!(decoder.decode_expecting(&record, "A").unwrap(), sample_a());

    let err = decoder.decode_expecting(&record, "B").unwrap_err();
    assert!(matches!(
        err,
        Error::VariantMismatch { expected, actual, .. }
            if expected == "B" && actual == "A"
    ));
}

#[test]
fn unknown_tag_is_rejected() {
    let decoder = Decoder::new(shape_registry());

    let err = decoder
        .decode(&json!({"tag": "Z", "name": "?"}))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownVariant { tag, .. } if tag == "Z"));
}

#[test]
fn malformed_records_are_rejected() {
    let decoder = Decoder::new(shape_registry());

    // Not an object at all.
    assert!(matches!(
        decoder.decode(&json!(42)).unwrap_err(),
        Error::MalformedRecord { .. }
    ));

    // No tag field.
    assert!(matches!(
        decoder.decode(&json!({"name": "x"})).unwrap_err(),
        Error::MalformedRecord { .. }
    ));

    // Tag field of the wrong type.
    assert!(matches!(
        decoder.decode(&json!({"tag": 7})).unwrap_err(),
        Error::MalformedRecord { .. }
    ));
}

#[test]
fn unknown_fields_pass_unless_denied() {
    let record = json!({"tag": "A", "name": "x", "extra": true});

    let lax = Decoder::new(shape_registry());
    assert!(lax.decode(&record).is_ok());

    let strict = Decoder::with_config(
        shape_registry(),
        Config {
            flags: CodecFlags::DENY_UNKNOWN_FIELDS,
        },
    );
    let err = strict.decode(&record).unwrap_err();
    assert!(matches!(err, Error::UnknownField { field, .. } if field == "extra"));
}

#[test]
fn payload_errors_carry_variant_context() {
    let decoder = Decoder::new(shape_registry());

    // `age` cannot deserialize into a u32.
    let err = decoder
        .decode(&json!({"tag": "B", "name": 3.14, "age": "old"}))
        .unwrap_err();
    assert!(matches!(err, Error::Payload { tag, .. } if tag == "B"));
}
