//! Benchmarks for introspection.
//!
//! Measures building a snapshot of a deep hierarchy, classifying its methods and
//! converting identifiers.

extern crate beanscope;

use beanscope::{
    metadata::typesystem::{ClassBuilder, ClassTypeRc, TypeRegistry, TypeSignature},
    reflection::{accessor, chain, naming},
    Reflection,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::{hint::black_box, sync::Arc};

/// A chain of `depth` types, each declaring `properties` auto properties plus a method
/// without backing field
fn build_hierarchy(depth: usize, properties: usize) -> (Arc<TypeRegistry>, ClassTypeRc) {
    let registry = Arc::new(TypeRegistry::new());
    let mut current: Option<ClassTypeRc> = None;

    for level in 0..depth {
        let mut builder = ClassBuilder::new(&format!("Level{}", level)).namespace("bench.model");
        if let Some(base) = &current {
            builder = builder.extends(base);
        }
        for property in 0..properties {
            builder = builder.auto_property(
                &format!("property{}Of{}", property, level),
                TypeSignature::String,
            );
        }
        builder = builder.method(&format!("getDerived{}", level), |m| {
            m.public().returns(TypeSignature::I4)
        });
        current = Some(builder.build(&registry).unwrap());
    }

    (registry, current.unwrap())
}

fn bench_snapshot(c: &mut Criterion) {
    let (_registry, leaf) = build_hierarchy(8, 16);

    c.bench_function("reflection_snapshot_8x16", |b| {
        b.iter(|| {
            let reflection = Reflection::new(black_box(&leaf));
            black_box(reflection.getters().len())
        });
    });
}

fn bench_chain(c: &mut Criterion) {
    let (_registry, leaf) = build_hierarchy(32, 1);

    c.bench_function("inheritance_chain_32", |b| {
        b.iter(|| black_box(chain::inheritance_chain(black_box(&leaf))));
    });
}

fn bench_classify(c: &mut Criterion) {
    let (_registry, leaf) = build_hierarchy(4, 16);
    let methods = chain::methods(&leaf);

    c.bench_function("classify_methods_4x16", |b| {
        b.iter(|| {
            methods
                .iter()
                .filter(|m| accessor::is_getter(black_box(*m)) || accessor::is_setter(*m))
                .count()
        });
    });
}

fn bench_naming(c: &mut Criterion) {
    let identifiers = [
        "id",
        "firstName",
        "lastName",
        "birthDate",
        "customerReferenceNumber",
        "vatID",
    ];

    c.bench_function("external_identifier", |b| {
        b.iter(|| {
            for identifier in identifiers {
                black_box(naming::external_identifier(black_box(identifier)));
            }
        });
    });

    c.bench_function("to_upper_camel_case", |b| {
        b.iter(|| {
            for identifier in identifiers {
                black_box(naming::to_upper_camel_case(black_box(identifier)).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_snapshot,
    bench_chain,
    bench_classify,
    bench_naming
);
criterion_main!(benches);
