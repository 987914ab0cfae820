//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use selkie::{
    from_fields, to_fields, Fields, LocalName, Registry, RegistryCell, TaggedUnion, UnionInfo,
    VariantInfo,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub name: f64,
    pub age: u32,
}

/// A small closed union with two structured variants and one
/// field-less singleton.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    A(Badge),
    B(Reading),
    C,
}

static SHAPE_INFO: Lazy<UnionInfo<Shape>> = Lazy::new(|| {
    UnionInfo::builder("Shape")
        .variant(VariantInfo::structured(
            "A",
            &["name"],
            |v| matches!(v, Shape::A(_)),
            |v| match v {
                Shape::A(badge) => to_fields(badge),
                _ => unreachable!(),
            },
            |fields| from_fields(fields).map(Shape::A),
        ))
        .variant(VariantInfo::structured(
            "B",
            &["name", "age"],
            |v| matches!(v, Shape::B(_)),
            |v| match v {
                Shape::B(reading) => to_fields(reading),
                _ => unreachable!(),
            },
            |fields| from_fields(fields).map(Shape::B),
        ))
        .variant(VariantInfo::singleton(
            "C",
            &[],
            |v| matches!(v, Shape::C),
            |_| Ok(Fields::new()),
            |_| Ok(Shape::C),
            || Some(Shape::C),
            |_, _| (),
        ))
        .build()
});

impl TaggedUnion for Shape {
    fn union_info() -> &'static UnionInfo<Self> {
        &SHAPE_INFO
    }
}

pub static SHAPES: RegistryCell<Shape> = RegistryCell::new();

pub fn shape_registry() -> &'static Registry<Shape> {
    SHAPES.get_or_build(&LocalName).expect("shape registry")
}

pub fn sample_a() -> Shape {
    Shape::A(Badge {
        name: "Class A".to_owned(),
    })
}

pub fn sample_b() -> Shape {
    Shape::B(Reading {
        name: 3.14,
        age: 23,
    })
}
