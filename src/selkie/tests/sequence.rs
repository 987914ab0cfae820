mod common;

use common::{sample_a, sample_b, shape_registry, Badge, Shape};
use selkie::{
    codec::{Decoder, Encoder},
    Error,
};

#[test]
fn sequences_tag_every_element() {
    let encoder = Encoder::new(shape_registry());

    let values = [sample_a(), sample_b(), Shape::C];
    let encoded = encoder.encode_all(&values).unwrap();

    assert_eq!(
        serde_json::to_string(&encoded).unwrap(),
        r#"[{"tag":"A","name":"Class A"},{"tag":"B","name":3.14,"age":23},{"tag":"C"}]"#
    );
}

#[test]
fn sequences_roundtrip() {
    let encoder = Encoder::new(shape_registry());
    let decoder = Decoder::new(shape_registry());

    let values = vec![sample_a(), Shape::C, sample_b(), sample_a()];
    let encoded = encoder.encode_all(&values).unwrap();

    assert_eq!(decoder.decode_all(&encoded).unwrap(), values);
}

// Serializing payloads without going through an `Encoder` strips the
// union identity from the call path, and with it the tags. The
// resulting records are plain payload fields and cannot be decoded
// back.
#[test]
fn bare_serde_sequences_lose_their_tags() {
    let payloads = vec![
        Badge {
            name: "Class A".to_owned(),
        },
        Badge {
            name: "Class B".to_owned(),
        },
    ];

    let untagged = serde_json::to_value(&payloads).unwrap();
    for element in untagged.as_array().unwrap() {
        assert!(element.get("tag").is_none());
        assert!(element.get("name").is_some());
    }

    let decoder = Decoder::new(shape_registry());
    let err = decoder.decode_all(&untagged).unwrap_err();
    assert!(matches!(err, Error::MalformedRecord { .. }));
}

#[test]
fn non_array_sequences_are_rejected() {
    let decoder = Decoder::new(shape_registry());

    let err = decoder
        .decode_all(&serde_json::json!({"tag": "C"}))
        .unwrap_err();
    assert!(matches!(err, Error::MalformedRecord { .. }));
}
