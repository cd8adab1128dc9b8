//! Wire codec throughput for a company hit with a three-level region chain.
//!
//! Run with: cargo bench -p searchhit-core

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use searchhit_core::wire::{decode_from_slice, encode_with};
use searchhit_core::{
    CodecConfig, Coordinate, Hit, HitKind, IdPair, InfoEntry, InfoKind, Review, WireForm,
    WireWriter,
};
use std::hint::black_box;

fn region(kind: HitKind, name: &str, item: u32) -> Hit {
    let mut hit = Hit::new(kind, IdPair::new(1, item), 0).with_name(name);
    hit.coord = Coordinate::new(556_000_000, 131_000_000);
    hit
}

fn company() -> Hit {
    let mut muni = region(HitKind::Municipal, "Lund", 2);
    muni.add_region_owned(region(HitKind::Country, "Sweden", 1))
        .expect("country is a region");
    let mut part = region(HitKind::CityPart, "Centrum", 3);
    part.add_region_owned(muni).expect("municipal is a region");

    let mut hit = Hit::new(HitKind::Company, IdPair::new(1, 100), 4).with_name("Café Lund");
    hit.coord = Coordinate::new(556_012_345, 131_098_765);
    hit.location_name = "Centrum, Lund".into();
    hit.points.score = 900;
    hit.infos = vec![
        InfoEntry::new(InfoKind::VisAddress, "Address", "Stortorget 1"),
        InfoEntry::new(InfoKind::PhoneNumber, "Phone", "+46 46 00 00 00"),
        InfoEntry::new(InfoKind::Url, "Web", "https://example.com/cafe"),
    ];
    if let Some(info) = hit.company_mut() {
        info.categories = vec![11, 12, 13];
        info.image_urls = vec!["https://example.com/cafe.jpg".into()];
        info.reviews = vec![Review::new(4, "Ann", "2024-05-01", "Good coffee")];
    }
    hit.add_region_owned(part).expect("city part is a region");
    hit
}

fn bench_codec(c: &mut Criterion) {
    let hit = company();
    let cfg = CodecConfig::default();
    let mut group = c.benchmark_group("codec");

    for form in [WireForm::Full, WireForm::Compact] {
        let label = format!("{form:?}");
        group.bench_with_input(BenchmarkId::new("encode", &label), &form, |b, form| {
            b.iter(|| {
                let mut w = WireWriter::with_capacity(4096);
                let n = encode_with(black_box(&hit), &mut w, *form, &cfg).expect("encode");
                black_box(n)
            });
        });

        let mut w = WireWriter::new();
        encode_with(&hit, &mut w, form, &cfg).expect("encode");
        let bytes = w.into_inner();
        group.bench_with_input(BenchmarkId::new("decode", &label), &form, |b, form| {
            b.iter(|| black_box(decode_from_slice(black_box(&bytes), *form).expect("decode")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
