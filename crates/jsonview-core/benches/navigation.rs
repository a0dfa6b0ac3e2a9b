//! Navigation, write-back and reshaping throughput on a synthetic document.

use criterion::{criterion_group, criterion_main, Criterion};
use jsonview_core::Cursor;
use serde_json::{json, Value};
use std::hint::black_box;

fn sample_document(items: usize) -> Value {
    let list: Vec<Value> = (0..items)
        .map(|i| {
            json!({
                "id": i,
                "displayName": format!("item {i}"),
                "stats": {"views": i * 3, "likes": null},
                "tags": ["a", "b"]
            })
        })
        .collect();
    json!({"meta": {"count": items}, "items": list})
}

fn bench_select(c: &mut Criterion) {
    let doc = Cursor::new(sample_document(500));
    c.bench_function("select_deep_path", |b| {
        b.iter(|| black_box(doc.select(black_box("items.250.stats.views")).as_int(0)))
    });
}

fn bench_write_back(c: &mut Criterion) {
    c.bench_function("write_with_vivification", |b| {
        b.iter(|| {
            let doc = Cursor::missing();
            for i in 0..50usize {
                doc.get("rows").get(i).set_at("value", i);
            }
            black_box(doc.size())
        })
    });
}

fn bench_update(c: &mut Criterion) {
    let ops = Cursor::new(json!({
        "$inc": {"meta.count": 1},
        "$set": {"meta.updated": true},
        "$push": {"items": {"id": -1}}
    }));
    c.bench_function("apply_update", |b| {
        b.iter_batched(
            || Cursor::new(sample_document(100)),
            |doc| {
                doc.apply_update(&ops);
                black_box(doc)
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_transform(c: &mut Criterion) {
    let doc = Cursor::new(sample_document(200));
    c.bench_function("filter_field_names", |b| {
        b.iter(|| black_box(doc.filter_field_names("items.id, items.stats.views")))
    });
    c.bench_function("to_snake_case", |b| b.iter(|| black_box(doc.to_snake_case())));
}

criterion_group!(
    benches,
    bench_select,
    bench_write_back,
    bench_update,
    bench_transform
);
criterion_main!(benches);
