//! Criterion benchmarks for catalog loading and lookup.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use msgcat::MessageCatalog;

const TEST_PO: &str = include_str!("../testdata/test.po");

fn bench_load_bytes(c: &mut Criterion) {
    let bytes = TEST_PO.as_bytes();
    c.bench_function("catalog_load_bytes", |b| {
        b.iter(|| MessageCatalog::from_bytes(black_box(bytes)).expect("load"));
    });
}

fn bench_gettext(c: &mut Criterion) {
    let catalog = MessageCatalog::from_bytes(TEST_PO.as_bytes()).expect("load");
    c.bench_function("catalog_gettext_hit", |b| {
        b.iter(|| black_box(catalog.gettext(black_box("One piggy went to the market."))));
    });
}

fn bench_ngettext(c: &mut Criterion) {
    let catalog = MessageCatalog::from_bytes(TEST_PO.as_bytes()).expect("load");
    c.bench_function("catalog_ngettext_hit", |b| {
        b.iter(|| {
            for n in 0..30u64 {
                black_box(catalog.ngettext(black_box("%d user likes this."), "plural", n));
            }
        });
    });
}

criterion_group!(benches, bench_load_bytes, bench_gettext, bench_ngettext);
criterion_main!(benches);
