// benches/transform_bench.rs
//! Benchmarks for block transformation and both encoders.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use notion2html::formatting::html::{escape_html, render_block};
use notion2html::{to_html, to_plain_text, transform};
use serde_json::{json, Value};

/// A mixed block stream with list runs, styled spans and skipped types.
fn create_sample_records(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| match i % 6 {
            0 => json!({
                "type": "heading_2",
                "heading_2": { "rich_text": [{ "plain_text": format!("Section {}", i) }] }
            }),
            1 => json!({
                "type": "paragraph",
                "paragraph": { "rich_text": [
                    { "plain_text": "Plain text with <markup> & entities, " },
                    { "plain_text": "bold", "annotations": { "bold": true, "italic": true } },
                    { "plain_text": " and a link", "href": "https://example.com" }
                ] }
            }),
            2 | 3 => json!({
                "type": "bulleted_list_item",
                "bulleted_list_item": { "rich_text": [{ "plain_text": format!("Item {}", i) }] }
            }),
            4 => json!({
                "type": "code",
                "code": { "language": "rust", "rich_text": [{ "plain_text": "let x = a < b && c > d;" }] }
            }),
            _ => json!({ "type": "table_of_contents", "table_of_contents": {} }),
        })
        .collect()
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for size in [10, 100, 1000] {
        let records = create_sample_records(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| transform(black_box(records)))
        });
    }

    group.finish();
}

fn bench_encoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [10, 100, 1000] {
        let body = transform(&create_sample_records(size));

        group.bench_with_input(BenchmarkId::new("html", size), &body, |b, body| {
            b.iter(|| to_html(black_box(body)))
        });
        group.bench_with_input(BenchmarkId::new("plain_text", size), &body, |b, body| {
            b.iter(|| to_plain_text(black_box(body)))
        });
        group.bench_with_input(BenchmarkId::new("per_block", size), &body, |b, body| {
            b.iter(|| body.iter().map(render_block).count())
        });
    }

    group.finish();
}

fn bench_escaping(c: &mut Criterion) {
    let clean = "a".repeat(4096);
    let dense = "<&>".repeat(1365);

    c.bench_function("escape_clean", |b| b.iter(|| escape_html(black_box(&clean))));
    c.bench_function("escape_dense", |b| b.iter(|| escape_html(black_box(&dense))));
}

criterion_group!(benches, bench_transform, bench_encoders, bench_escaping);
criterion_main!(benches);
