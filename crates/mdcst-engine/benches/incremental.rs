use criterion::{Criterion, criterion_group, criterion_main};
use mdcst_engine::incremental::edit_insert;
use mdcst_engine::{parse, parse_incremental};
mod common;

fn bench_full_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_parse");
    group.sample_size(20);

    let content = common::generate_markdown_content(100);
    group.bench_function("parse", |b| {
        b.iter(|| {
            let doc = parse(std::hint::black_box(&content));
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

fn bench_incremental_reparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_reparse");
    group.sample_size(20);

    let old_source = common::generate_markdown_content(100);
    let prev = parse(&old_source);

    // A single-character insertion in the middle of one paragraph; only the
    // damage window around it should be reparsed.
    let at = old_source.find("Section 50").unwrap() + "Section 50\n\nSome ".len();
    let edit = edit_insert(at, 1);
    let mut new_source = old_source.clone();
    new_source.insert(at, 'X');

    group.bench_function("single_char_insert", |b| {
        b.iter(|| {
            let doc = parse_incremental(
                std::hint::black_box(&prev),
                std::hint::black_box(&old_source),
                std::hint::black_box(&new_source),
                edit,
            );
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_full_parse, bench_incremental_reparse);
criterion_main!(benches);
