//! Benchmarks for source emission.

use bindata_core::types::Resource;
use bindata_core::{exporter, CollisionPolicy, ExportConfig, ResourceTable, Target};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::PathBuf;

fn sample_table(entries: usize, size: usize) -> ResourceTable {
    let resources = (0..entries).map(|i| Resource {
        identifier: format!("textures/tile_{:04}.png", i),
        source: PathBuf::from(format!("assets/textures/tile_{:04}.png", i)),
        data: (0..size).map(|b| (b * 31 + i) as u8).collect(),
    });
    ResourceTable::from_resources(resources, CollisionPolicy::LastWins)
        .expect("no collisions in sample")
        .0
}

fn bench_emit_cpp(c: &mut Criterion) {
    let table = sample_table(64, 16 * 1024);
    let config = ExportConfig::new("Assets");

    c.bench_function("emit_cpp_1mib", |b| {
        b.iter(|| black_box(exporter::export(&table, &config, Target::Cpp).unwrap().len()))
    });
}

fn bench_emit_rust(c: &mut Criterion) {
    let table = sample_table(64, 16 * 1024);
    let config = ExportConfig::new("assets");

    c.bench_function("emit_rust_1mib", |b| {
        b.iter(|| black_box(exporter::export(&table, &config, Target::Rust).unwrap().len()))
    });
}

criterion_group!(benches, bench_emit_cpp, bench_emit_rust);
criterion_main!(benches);
