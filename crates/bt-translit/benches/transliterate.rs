use bt_core::config::{EngineOptions, RenderOptions};
use bt_translit::batch::transliterate_batch;
use bt_translit::glyph::GlyphTable;
use bt_translit::render::render;
use bt_translit::transliterate::transliterate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const SAMPLE: &str = "The Quick Brown Fox jumps over 13 lazy dogs; it's 42.5% (roughly) true!\n";

fn bench_transliterate(c: &mut Criterion) {
    let text = SAMPLE.repeat(64);
    c.bench_function("transliterate_4k", |b| {
        b.iter(|| transliterate(black_box(&text)));
    });
}

fn bench_render(c: &mut Criterion) {
    let outputs = transliterate(&SAMPLE.repeat(64));
    let table = GlyphTable::default();
    let options = RenderOptions::default();
    c.bench_function("render_unicode_4k", |b| {
        b.iter(|| render(black_box(&outputs), &options, &table));
    });
}

fn bench_batch(c: &mut Criterion) {
    let messages: Vec<String> = (0..1024).map(|i| format!("{i}: {SAMPLE}")).collect();
    let options = EngineOptions::default();
    c.bench_function("batch_1024", |b| {
        b.iter(|| transliterate_batch(black_box(&messages), &options));
    });
}

criterion_group!(benches, bench_transliterate, bench_render, bench_batch);
criterion_main!(benches);
