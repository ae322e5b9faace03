use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ixbrl_context::{attrs, contexts_to_json, AttrMap, Context, DateValue};

fn duration_context(id: &str, segments: usize) -> Context {
    let segments = if segments == 0 {
        None
    } else {
        Some(
            (0..segments)
                .map(|i| attrs! { "dimension": "Region", "value": (format!("seg-{i}")) })
                .collect::<Vec<AttrMap>>(),
        )
    };

    Context::new(
        id,
        attrs! { "scheme": "http://www.sec.gov/CIK", "identifier": "0000320193" },
        segments,
        None,
        Some("2022-01-01"),
        Some("2022-12-31"),
    )
}

fn benchmark_date_normalization(c: &mut Criterion) {
    c.bench_function("normalize_valid_date", |b| {
        b.iter(|| DateValue::parse(black_box(Some(" 2022-01-01 "))))
    });

    c.bench_function("normalize_passthrough_text", |b| {
        b.iter(|| DateValue::parse(black_box(Some("three months ended 2022"))))
    });
}

fn benchmark_to_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_json");

    for segments in [0, 1, 10, 50].iter() {
        let context = duration_context("bench", *segments);

        group.bench_with_input(
            BenchmarkId::from_parameter(segments),
            &context,
            |b, context| b.iter(|| black_box(context).to_json()),
        );
    }

    group.finish();
}

fn benchmark_document_export(c: &mut Criterion) {
    let contexts: Vec<Context> = (0..100)
        .map(|i| duration_context(&format!("c{i}"), 2))
        .collect();

    c.bench_function("export_100_contexts", |b| {
        b.iter(|| contexts_to_json(black_box(&contexts)))
    });
}

criterion_group!(
    benches,
    benchmark_date_normalization,
    benchmark_to_json,
    benchmark_document_export
);
criterion_main!(benches);
